//! Single-character console commands
//!
//! A static table maps trigger characters to actions on [`AppState`]. Every
//! action reports what it did on the console; unknown characters only print
//! a usage hint.

use core::fmt::Write;

use crate::channel::CommandReceiver;
use crate::effect::AnimationMode;
use crate::state::AppState;

/// What a command does when triggered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandAction {
    /// Print the command table and a status line
    PrintHelp,
    /// Toggle echoing of voltage samples
    ToggleMeasuring,
    /// Toggle the output together with the lights
    ToggleEnabled,
    /// Toggle the animation master switch
    ToggleAnimating,
    /// Switch animation mode and restart its phase
    Select(AnimationMode),
}

/// Entry of the command table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub trigger: char,
    pub help: &'static str,
    pub action: CommandAction,
}

impl Command {
    const fn new(trigger: char, help: &'static str, action: CommandAction) -> Self {
        Self {
            trigger,
            help,
            action,
        }
    }
}

pub static COMMANDS: [Command; 10] = [
    Command::new('?', "print this help", CommandAction::PrintHelp),
    Command::new('m', "toggle measuring", CommandAction::ToggleMeasuring),
    Command::new('e', "toggle enabled", CommandAction::ToggleEnabled),
    Command::new(' ', "space to toggle animation", CommandAction::ToggleAnimating),
    Command::new(
        '1',
        "animate left",
        CommandAction::Select(AnimationMode::AnimateLeft),
    ),
    Command::new(
        '2',
        "animate front",
        CommandAction::Select(AnimationMode::AnimateFront),
    ),
    Command::new(
        '3',
        "animate right",
        CommandAction::Select(AnimationMode::AnimateRight),
    ),
    Command::new(
        '4',
        "animate back",
        CommandAction::Select(AnimationMode::AnimateBack),
    ),
    Command::new(
        'r',
        "animate running",
        CommandAction::Select(AnimationMode::Running),
    ),
    Command::new('0', "animate all", CommandAction::Select(AnimationMode::Startup)),
];

const USAGE_HINT: &str = "Press ? for help";

/// Find the table entry for a trigger character
pub fn find(trigger: char) -> Option<&'static Command> {
    COMMANDS.iter().find(|command| command.trigger == trigger)
}

impl CommandAction {
    /// Apply the action and report the result on `console`
    pub fn apply<W: Write>(self, state: &mut AppState, console: &mut W) {
        match self {
            Self::PrintHelp => {
                let _ = print_help(state, console);
            }
            Self::ToggleMeasuring => {
                let measuring = !state.is_measuring();
                state.set_measuring(measuring);
                let _ = writeln!(console, "measuring: {}", u8::from(measuring));
            }
            Self::ToggleEnabled => {
                let status = state.power_mut().toggle_enabled();
                let _ = writeln!(console, "enabled: {}", u8::from(status.is_enabled()));
            }
            Self::ToggleAnimating => {
                let engine = state.engine_mut();
                let animating = !engine.is_animating();
                engine.set_animating(animating);
                let _ = writeln!(console, "animating: {}", u8::from(animating));
            }
            Self::Select(mode) => {
                state.engine_mut().select(mode);
                let _ = writeln!(console, "{}", select_message(mode));
            }
        }
    }
}

fn select_message(mode: AnimationMode) -> &'static str {
    COMMANDS
        .iter()
        .find(|command| command.action == CommandAction::Select(mode))
        .map_or(mode.as_str(), |command| command.help)
}

fn print_help<W: Write>(state: &AppState, console: &mut W) -> core::fmt::Result {
    writeln!(console)?;
    for command in &COMMANDS {
        writeln!(console, "{}: {}", command.trigger, command.help)?;
    }
    let power = state.power();
    let engine = state.engine();
    writeln!(
        console,
        "\nenabled: {} lights: {} animating: {} dimmed {} mode {} lastVolt: {:.2}",
        u8::from(power.is_enabled()),
        u8::from(!power.suppress_lights()),
        u8::from(engine.is_animating()),
        u8::from(power.is_dimmed()),
        engine.mode().as_str(),
        power.last_volts(),
    )
}

/// Routes console bytes into the command table
pub struct CommandDispatcher<'a, const SIZE: usize> {
    commands: CommandReceiver<'a, SIZE>,
}

impl<'a, const SIZE: usize> CommandDispatcher<'a, SIZE> {
    pub const fn new(commands: CommandReceiver<'a, SIZE>) -> Self {
        Self { commands }
    }

    /// Handle at most one pending byte (non-blocking)
    ///
    /// Returns the action that ran, or `None` if nothing was pending or the
    /// byte matched no command.
    pub fn poll<W: Write>(&mut self, state: &mut AppState, console: &mut W) -> Option<CommandAction> {
        let byte = self.commands.try_receive()?;
        dispatch(byte, state, console)
    }
}

/// Run the command bound to `byte`
///
/// Unknown bytes leave `state` untouched and print a usage hint.
pub fn dispatch<W: Write>(byte: u8, state: &mut AppState, console: &mut W) -> Option<CommandAction> {
    let Some(command) = find(char::from(byte)) else {
        let _ = writeln!(console, "{}", USAGE_HINT);
        return None;
    };
    command.action.apply(state, console);
    Some(command.action)
}
