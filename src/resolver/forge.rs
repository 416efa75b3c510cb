//! Index and forge-user probing

use crate::config::dedup_preserving_order;
use crate::locator::Locator;
use crate::probe::Probe;

/// The configured set of GitHub usernames probed for packages.
///
/// Built from the persisted config plus any CLI-supplied extras;
/// duplicates collapse to their first occurrence.
#[derive(Debug, Clone, Default)]
pub struct Userbase {
    users: Vec<String>,
}

impl Userbase {
    pub fn new<I, S>(users: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            users: dedup_preserving_order(users),
        }
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    /// Collect every source where `package` exists: the PyPI index first,
    /// then each user's forge repository in userbase order.
    ///
    /// An empty userbase yields at most the index hit. Probe order carries
    /// no precedence; index and forge hits are peers.
    pub fn resolve(&self, package: &str, probe: &dyn Probe) -> Vec<Locator> {
        let candidates = std::iter::once(Locator::index(package))
            .chain(self.users.iter().map(|user| Locator::forge(user, package)));

        candidates
            .filter(|locator| {
                locator
                    .probe_url()
                    .is_some_and(|url| probe.exists(&url))
            })
            .collect()
    }
}
