/// Mode selected by the first positional argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// `n`: translate a Japanese phrase into an identifier name.
    Name,
    /// `s`: list synonym candidates with their Japanese digests.
    Synonym,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run { mode: Mode, source: String },
    Usage,
}

pub const USAGE: &str = "godic is a cli of codic

Command:
\tn\t: Translate to variable name or function name
\ts\t: List synonym

Example:
\tgodic n 存在するか
\tgodic s 取得する

Learn more
\thttps://codic.jp/engine";

/// Reads the two positional tokens: mode and source text. Anything short of
/// that, or an unknown mode, falls back to the usage block. The source text
/// is passed through untouched.
pub fn parse<I>(args: I) -> Command
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();

    let (mode, source) = match (args.next(), args.next()) {
        (Some(m), Some(s)) => (m, s),
        _ => return Command::Usage,
    };

    let mode = match mode.as_str() {
        "n" => Mode::Name,
        "s" => Mode::Synonym,
        _ => return Command::Usage,
    };

    Command::Run { mode, source }
}
