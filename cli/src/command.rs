use sweeper_core::Coord;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Select(Coord, Coord),
    Restart,
    Json,
    Help,
    Quit,
}

impl Command {
    pub(crate) fn parse(line: &str) -> Option<Self> {
        let mut words = line.split_whitespace();
        let first = words.next()?;
        let command = match first {
            "r" | "restart" => Self::Restart,
            "q" | "quit" => Self::Quit,
            "json" => Self::Json,
            "h" | "help" | "?" => Self::Help,
            x => {
                let y = words.next()?;
                Self::Select(x.parse().ok()?, y.parse().ok()?)
            }
        };
        words.next().is_none().then_some(command)
    }
}
