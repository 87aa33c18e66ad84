//! Console command parsing.

use tabdeck_common::{Action, TabRef, TabdeckError, WidgetKind};

/// Parse one console line into an [`Action`].
///
/// Blank lines and `#` comments parse to [`Action::None`]. `async` without
/// an amount uses `async_amount`.
pub fn parse_command(line: &str, async_amount: i64) -> Result<Action, TabdeckError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(Action::None);
    }
    let mut words = line.split_whitespace();
    let verb = words.next().unwrap_or_default().to_ascii_lowercase();
    let args: Vec<&str> = words.collect();

    let action = match (verb.as_str(), args.as_slice()) {
        ("add", [kind]) => Action::AddWidget(
            kind.parse::<WidgetKind>()
                .map_err(TabdeckError::Other)?,
        ),
        ("click" | "select", [tab]) => Action::ClickTab(tab_ref(tab)?),
        ("close", [tab]) => Action::CloseTab(tab_ref(tab)?),
        ("click-at", [x, y]) => Action::ClickAt {
            x: number(x)?,
            y: number(y)?,
        },
        ("press", []) => Action::PressButton,
        ("increment" | "inc", []) => Action::Increment,
        ("decrement" | "dec", []) => Action::Decrement,
        ("add-amount", [n]) => Action::IncrementByAmount(number(n)?),
        ("async", []) => Action::IncrementAsync(async_amount),
        ("async", [n]) => Action::IncrementAsync(number(n)?),
        ("resize", [w, h]) => Action::Resize {
            width: number(w)?,
            height: number(h)?,
        },
        ("show", []) => Action::Show,
        ("wait", [ms]) => Action::Wait(number(ms)?),
        ("help" | "?", []) => Action::Help,
        ("quit" | "exit", []) => Action::Quit,
        (verb, _) if is_known_verb(verb) => {
            return Err(TabdeckError::Other(format!("usage: {}", usage(verb))));
        }
        _ => return Err(TabdeckError::UnknownCommand(line.to_string())),
    };
    Ok(action)
}

fn tab_ref(s: &str) -> Result<TabRef, TabdeckError> {
    TabRef::parse(s).ok_or_else(|| TabdeckError::Other(format!("bad tab reference '{s}'")))
}

fn number<T: std::str::FromStr>(s: &str) -> Result<T, TabdeckError> {
    s.parse()
        .map_err(|_| TabdeckError::Other(format!("'{s}' is not a valid number")))
}

const COMMANDS: &[(&str, &str)] = &[
    ("add", "add incrementor|decrementor|watcher"),
    ("click", "click <tab#|id>"),
    ("select", "click <tab#|id>"),
    ("close", "close <tab#|id>"),
    ("click-at", "click-at <x> <y>"),
    ("press", "press"),
    ("increment", "increment"),
    ("decrement", "decrement"),
    ("add-amount", "add-amount <n>"),
    ("async", "async [n]"),
    ("resize", "resize <width> <height>"),
    ("show", "show"),
    ("wait", "wait <ms>"),
    ("help", "help"),
    ("quit", "quit"),
];

fn is_known_verb(verb: &str) -> bool {
    COMMANDS.iter().any(|(name, _)| *name == verb)
}

fn usage(verb: &str) -> &'static str {
    COMMANDS
        .iter()
        .find(|(name, _)| *name == verb)
        .map(|(_, usage)| *usage)
        .unwrap_or("help")
}

/// Command syntax for an action, as listed by `help`.
fn syntax(action: &Action) -> &'static str {
    match action {
        Action::AddWidget(WidgetKind::Incrementor) => "add incrementor",
        Action::AddWidget(WidgetKind::Decrementor) => "add decrementor",
        Action::AddWidget(WidgetKind::Watcher) => "add watcher",
        Action::ClickTab(_) => usage("click"),
        Action::CloseTab(_) => usage("close"),
        Action::ClickAt { .. } => usage("click-at"),
        Action::PressButton => usage("press"),
        Action::Increment => usage("increment"),
        Action::Decrement => usage("decrement"),
        Action::IncrementByAmount(_) => usage("add-amount"),
        Action::IncrementAsync(_) => usage("async"),
        Action::Resize { .. } => usage("resize"),
        Action::Show => usage("show"),
        Action::Wait(_) => usage("wait"),
        Action::Help => usage("help"),
        Action::Quit => usage("quit"),
        Action::None => "",
    }
}

/// Lines printed by the `help` command.
pub(super) fn help_lines() -> Vec<String> {
    Action::help_actions()
        .iter()
        .map(|action| format!("  {:<38} {}", syntax(action), action.label()))
        .collect()
}
