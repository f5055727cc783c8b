use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    globoticket completions bash > ~/.bash_completion.d/globoticket\n\n\
                  Generate zsh completions:\n    globoticket completions zsh > ~/.zfunc/_globoticket\n\n\
                  Generate fish completions:\n    globoticket completions fish > ~/.config/fish/completions/globoticket.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
