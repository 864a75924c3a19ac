/// Classified terminal input: a case-insensitive verb plus its verbatim
/// remainder. Classification is unconditional; whether a command is allowed
/// in the current session (admin, editing) is the dispatcher's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Clear,
    Help,
    About,
    /// Remainder after "/login", password verbatim (may be None).
    Login(Option<&'a str>),
    Logout,
    List,
    View(Option<&'a str>),
    New,
    Save,
    Cancel,
    Title(&'a str),
    Kind(&'a str),
    Tags(&'a str),
    /// Anything that is not a known verb; becomes a content line while
    /// editing.
    Free(&'a str),
}

/// Split the trimmed input into verb + remainder and classify the verb.
/// The remainder is never trimmed: titles and passwords keep their spacing.
pub fn parse(input: &str) -> Command<'_> {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    let (verb, rest) = match input.split_once(' ') {
        Some((verb, rest)) => (verb, Some(rest)),
        None => (input, None),
    };

    match verb.to_lowercase().as_str() {
        "/clear" => Command::Clear,
        "/help" => Command::Help,
        "/sobre" => Command::About,
        "/login" => Command::Login(rest),
        "/logout" => Command::Logout,
        "/list" => Command::List,
        "/view" => Command::View(rest),
        "/newpost" => Command::New,
        "/salvar" => Command::Save,
        "/cancelar" => Command::Cancel,
        "/title" => Command::Title(rest.unwrap_or("")),
        "/type" => Command::Kind(rest.unwrap_or("")),
        "/tags" => Command::Tags(rest.unwrap_or("")),
        _ => Command::Free(input),
    }
}
