use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    gitpip completions bash > ~/.bash_completion.d/gitpip\n\n\
                  Generate zsh completions:\n    gitpip completions zsh > ~/.zfunc/_gitpip\n\n\
                  Generate fish completions:\n    gitpip completions fish > ~/.config/fish/completions/gitpip.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
