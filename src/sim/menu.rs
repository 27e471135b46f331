//! Menu navigation state machine
//!
//! A pure transition function over [`Mode`]: it receives one edge-triggered
//! command, the current mode and cursor, and returns the next mode, the next
//! cursor, and declarative side-effect signals. It never mutates anything
//! and never performs the effects itself; [`crate::app::App`] applies them.
//!
//! The cursor ranges per screen:
//! - Title: 4 options (PvP, PvC, Settings, Quit)
//! - Settings: 4 options (Fullscreen, Sound, Controls, Back)
//! - Controls: the single "Back" line
//! - ConfirmExit: options 1 (Yes) and 2 (No); line 0 is the prompt text
//! - Menu: 2 options (Back to game, Go to menu)

use crate::sim::state::{Mode, Sound};

/// An edge-triggered discrete command, delivered at most once per physical
/// key transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Cancel,
    TogglePause,
    OpenMenu,
    ResumeFromPause,
    ResumeFromMenu,
    ReturnToTitle,
}

/// Declarative side effects of a transition, applied by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    PlaySound(Sound),
    /// Reset scores and entities, then serve
    StartMatch,
    VolumeUp,
    VolumeDown,
    ToggleFullscreen,
    /// Confirmed quit; the process should terminate cleanly
    Exit,
}

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub mode: Mode,
    pub cursor: u8,
    pub signals: Vec<Signal>,
}

impl Transition {
    fn stay(mode: Mode, cursor: u8) -> Self {
        Self {
            mode,
            cursor,
            signals: Vec::new(),
        }
    }

    fn goto(mode: Mode, cursor: u8) -> Self {
        Self::stay(mode, cursor)
    }

    fn with(mut self, signal: Signal) -> Self {
        self.signals.push(signal);
        self
    }
}

/// Inclusive cursor range for a mode, if it carries a cursor at all
pub fn cursor_bounds(mode: Mode) -> Option<(u8, u8)> {
    match mode {
        Mode::Title | Mode::Settings => Some((0, 3)),
        Mode::Controls => Some((0, 0)),
        Mode::ConfirmExit => Some((1, 2)),
        Mode::Menu => Some((0, 1)),
        Mode::PvPPlay | Mode::PvCPlay | Mode::Pause => None,
    }
}

fn cursor_up(mode: Mode, cursor: u8) -> u8 {
    match cursor_bounds(mode) {
        Some((lo, hi)) => {
            if cursor <= lo {
                hi
            } else {
                cursor - 1
            }
        }
        None => cursor,
    }
}

fn cursor_down(mode: Mode, cursor: u8) -> u8 {
    match cursor_bounds(mode) {
        Some((lo, hi)) => {
            if cursor >= hi {
                lo
            } else {
                cursor + 1
            }
        }
        None => cursor,
    }
}

/// Handle one discrete command.
///
/// Commands without a defined meaning for the current mode leave the state
/// untouched and emit no signals; they are never an error.
pub fn handle_command(mode: Mode, cursor: u8, command: Command) -> Transition {
    match mode {
        Mode::Title => title(cursor, command),
        Mode::Settings => settings(cursor, command),
        Mode::Controls => controls(cursor, command),
        Mode::ConfirmExit => confirm_exit(cursor, command),
        Mode::PvPPlay | Mode::PvCPlay => play(mode, cursor, command),
        Mode::Pause => pause(cursor, command),
        Mode::Menu => menu(cursor, command),
    }
}

fn title(cursor: u8, command: Command) -> Transition {
    let mode = Mode::Title;
    match command {
        Command::Up => Transition::stay(mode, cursor_up(mode, cursor)),
        Command::Down => Transition::stay(mode, cursor_down(mode, cursor)),
        Command::Confirm => match cursor {
            0 => Transition::goto(Mode::PvPPlay, cursor)
                .with(Signal::PlaySound(Sound::MenuConfirm))
                .with(Signal::StartMatch),
            1 => Transition::goto(Mode::PvCPlay, cursor)
                .with(Signal::PlaySound(Sound::MenuConfirm))
                .with(Signal::StartMatch),
            2 => Transition::goto(Mode::Settings, 0),
            _ => Transition::goto(Mode::ConfirmExit, 2).with(Signal::PlaySound(Sound::MenuBack)),
        },
        Command::Cancel => {
            Transition::goto(Mode::ConfirmExit, 2).with(Signal::PlaySound(Sound::MenuBack))
        }
        _ => Transition::stay(mode, cursor),
    }
}

fn settings(cursor: u8, command: Command) -> Transition {
    let mode = Mode::Settings;
    match command {
        Command::Up => Transition::stay(mode, cursor_up(mode, cursor)),
        Command::Down => Transition::stay(mode, cursor_down(mode, cursor)),
        // Left/Right only matter on the Sound line
        Command::Left if cursor == 1 => Transition::stay(mode, cursor).with(Signal::VolumeDown),
        Command::Right if cursor == 1 => Transition::stay(mode, cursor).with(Signal::VolumeUp),
        Command::Confirm => match cursor {
            0 => Transition::stay(mode, cursor).with(Signal::ToggleFullscreen),
            2 => Transition::goto(Mode::Controls, 0),
            3 => Transition::goto(Mode::Title, 0),
            _ => Transition::stay(mode, cursor),
        },
        Command::Cancel => Transition::goto(Mode::Title, 0),
        _ => Transition::stay(mode, cursor),
    }
}

fn controls(cursor: u8, command: Command) -> Transition {
    match command {
        // Leaving Controls lands back on the Settings "Controls" line
        Command::Confirm | Command::Cancel => Transition::goto(Mode::Settings, 2),
        _ => Transition::stay(Mode::Controls, cursor),
    }
}

fn confirm_exit(cursor: u8, command: Command) -> Transition {
    let mode = Mode::ConfirmExit;
    match command {
        Command::Up => Transition::stay(mode, cursor_up(mode, cursor)),
        Command::Down => Transition::stay(mode, cursor_down(mode, cursor)),
        Command::Confirm => match cursor {
            1 => Transition::stay(mode, cursor).with(Signal::Exit),
            2 => Transition::goto(Mode::Title, 0),
            _ => Transition::stay(mode, cursor),
        },
        Command::Cancel => Transition::goto(Mode::Title, 0),
        _ => Transition::stay(mode, cursor),
    }
}

fn play(mode: Mode, cursor: u8, command: Command) -> Transition {
    match command {
        Command::TogglePause => Transition::goto(Mode::Pause, cursor),
        Command::OpenMenu => Transition::goto(Mode::Menu, 0),
        _ => Transition::stay(mode, cursor),
    }
}

fn pause(cursor: u8, command: Command) -> Transition {
    match command {
        Command::TogglePause | Command::ResumeFromPause => {
            Transition::goto(Mode::PvPPlay, cursor)
        }
        Command::OpenMenu => Transition::goto(Mode::Menu, 0),
        _ => Transition::stay(Mode::Pause, cursor),
    }
}

fn menu(cursor: u8, command: Command) -> Transition {
    let mode = Mode::Menu;
    match command {
        Command::Up => Transition::stay(mode, cursor_up(mode, cursor)),
        Command::Down => Transition::stay(mode, cursor_down(mode, cursor)),
        Command::Confirm => match cursor {
            0 => Transition::goto(Mode::PvPPlay, cursor),
            _ => Transition::goto(Mode::Title, 0).with(Signal::PlaySound(Sound::MenuBack)),
        },
        Command::Cancel | Command::ResumeFromMenu => Transition::goto(Mode::PvPPlay, cursor),
        Command::ReturnToTitle => {
            Transition::goto(Mode::Title, 0).with(Signal::PlaySound(Sound::MenuBack))
        }
        _ => Transition::stay(mode, cursor),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ALL_MODES: [Mode; 8] = [
        Mode::Title,
        Mode::Settings,
        Mode::Controls,
        Mode::ConfirmExit,
        Mode::PvPPlay,
        Mode::PvCPlay,
        Mode::Pause,
        Mode::Menu,
    ];

    const ALL_COMMANDS: [Command; 11] = [
        Command::Up,
        Command::Down,
        Command::Left,
        Command::Right,
        Command::Confirm,
        Command::Cancel,
        Command::TogglePause,
        Command::OpenMenu,
        Command::ResumeFromPause,
        Command::ResumeFromMenu,
        Command::ReturnToTitle,
    ];

    fn initial_cursor(mode: Mode) -> u8 {
        cursor_bounds(mode).map(|(lo, _)| lo).unwrap_or(0)
    }

    #[test]
    fn test_title_confirm_rows() {
        let t = handle_command(Mode::Title, 0, Command::Confirm);
        assert_eq!(t.mode, Mode::PvPPlay);
        assert!(t.signals.contains(&Signal::StartMatch));
        assert!(t.signals.contains(&Signal::PlaySound(Sound::MenuConfirm)));

        let t = handle_command(Mode::Title, 1, Command::Confirm);
        assert_eq!(t.mode, Mode::PvCPlay);
        assert!(t.signals.contains(&Signal::StartMatch));

        let t = handle_command(Mode::Title, 2, Command::Confirm);
        assert_eq!(t.mode, Mode::Settings);
        assert_eq!(t.cursor, 0);
        assert!(t.signals.is_empty());

        // Quit line and Cancel both reach the prompt with "No" pre-selected
        for t in [
            handle_command(Mode::Title, 3, Command::Confirm),
            handle_command(Mode::Title, 1, Command::Cancel),
        ] {
            assert_eq!(t.mode, Mode::ConfirmExit);
            assert_eq!(t.cursor, 2);
            assert!(t.signals.contains(&Signal::PlaySound(Sound::MenuBack)));
        }
    }

    #[test]
    fn test_title_cursor_wraps() {
        assert_eq!(handle_command(Mode::Title, 0, Command::Up).cursor, 3);
        assert_eq!(handle_command(Mode::Title, 3, Command::Down).cursor, 0);
        assert_eq!(handle_command(Mode::Title, 1, Command::Up).cursor, 0);
        assert_eq!(handle_command(Mode::Title, 1, Command::Down).cursor, 2);
    }

    #[test]
    fn test_settings_rows() {
        let t = handle_command(Mode::Settings, 0, Command::Confirm);
        assert_eq!(t.mode, Mode::Settings);
        assert_eq!(t.signals, vec![Signal::ToggleFullscreen]);

        let t = handle_command(Mode::Settings, 2, Command::Confirm);
        assert_eq!(t.mode, Mode::Controls);
        assert_eq!(t.cursor, 0);

        let t = handle_command(Mode::Settings, 3, Command::Confirm);
        assert_eq!(t.mode, Mode::Title);
        assert_eq!(t.cursor, 0);

        let t = handle_command(Mode::Settings, 1, Command::Cancel);
        assert_eq!(t.mode, Mode::Title);
        assert_eq!(t.cursor, 0);
    }

    #[test]
    fn test_settings_volume_only_on_sound_line() {
        let t = handle_command(Mode::Settings, 1, Command::Left);
        assert_eq!(t.signals, vec![Signal::VolumeDown]);
        let t = handle_command(Mode::Settings, 1, Command::Right);
        assert_eq!(t.signals, vec![Signal::VolumeUp]);

        for cursor in [0, 2, 3] {
            let t = handle_command(Mode::Settings, cursor, Command::Left);
            assert!(t.signals.is_empty());
            assert_eq!(t.cursor, cursor);
        }
    }

    #[test]
    fn test_controls_returns_to_settings_controls_line() {
        for cmd in [Command::Confirm, Command::Cancel] {
            let t = handle_command(Mode::Controls, 0, cmd);
            assert_eq!(t.mode, Mode::Settings);
            assert_eq!(t.cursor, 2);
        }
    }

    #[test]
    fn test_confirm_exit_rows() {
        let t = handle_command(Mode::ConfirmExit, 1, Command::Confirm);
        assert_eq!(t.mode, Mode::ConfirmExit);
        assert_eq!(t.signals, vec![Signal::Exit]);

        for t in [
            handle_command(Mode::ConfirmExit, 2, Command::Confirm),
            handle_command(Mode::ConfirmExit, 1, Command::Cancel),
        ] {
            assert_eq!(t.mode, Mode::Title);
            assert_eq!(t.cursor, 0);
            assert!(t.signals.is_empty());
        }
    }

    #[test]
    fn test_confirm_exit_cursor_skips_prompt_line() {
        // Option 0 is the non-selectable prompt; the cursor lives in [1, 2]
        assert_eq!(handle_command(Mode::ConfirmExit, 1, Command::Up).cursor, 2);
        assert_eq!(handle_command(Mode::ConfirmExit, 2, Command::Down).cursor, 1);
        assert_eq!(handle_command(Mode::ConfirmExit, 2, Command::Up).cursor, 1);
        assert_eq!(handle_command(Mode::ConfirmExit, 1, Command::Down).cursor, 2);
    }

    #[test]
    fn test_play_pause_menu_rows() {
        for play_mode in [Mode::PvPPlay, Mode::PvCPlay] {
            let t = handle_command(play_mode, 0, Command::TogglePause);
            assert_eq!(t.mode, Mode::Pause);

            let t = handle_command(play_mode, 0, Command::OpenMenu);
            assert_eq!(t.mode, Mode::Menu);
            assert_eq!(t.cursor, 0);
        }

        assert_eq!(
            handle_command(Mode::Pause, 0, Command::TogglePause).mode,
            Mode::PvPPlay
        );
        assert_eq!(
            handle_command(Mode::Pause, 0, Command::OpenMenu).mode,
            Mode::Menu
        );

        let t = handle_command(Mode::Menu, 0, Command::Confirm);
        assert_eq!(t.mode, Mode::PvPPlay);
        assert!(t.signals.is_empty());

        let t = handle_command(Mode::Menu, 1, Command::Confirm);
        assert_eq!(t.mode, Mode::Title);
        assert_eq!(t.cursor, 0);
        assert!(t.signals.contains(&Signal::PlaySound(Sound::MenuBack)));

        assert_eq!(
            handle_command(Mode::Menu, 1, Command::Cancel).mode,
            Mode::PvPPlay
        );
    }

    #[test]
    fn test_unlisted_commands_are_noops() {
        let samples = [
            (Mode::Title, 1, Command::TogglePause),
            (Mode::Title, 2, Command::Left),
            (Mode::Title, 0, Command::OpenMenu),
            (Mode::Settings, 0, Command::TogglePause),
            (Mode::Controls, 0, Command::Up),
            (Mode::Controls, 0, Command::Down),
            (Mode::ConfirmExit, 2, Command::Left),
            (Mode::PvPPlay, 0, Command::Confirm),
            (Mode::PvPPlay, 0, Command::Up),
            (Mode::PvCPlay, 0, Command::Cancel),
            (Mode::Pause, 0, Command::Confirm),
            (Mode::Pause, 0, Command::Up),
            (Mode::Menu, 0, Command::TogglePause),
            (Mode::Menu, 0, Command::Left),
        ];
        for (mode, cursor, cmd) in samples {
            let t = handle_command(mode, cursor, cmd);
            assert_eq!(t.mode, mode, "{cmd:?} in {mode:?} must not transition");
            assert_eq!(t.cursor, cursor);
            assert!(t.signals.is_empty());
        }
    }

    proptest! {
        /// Any command sequence keeps the cursor inside the active mode's
        /// valid range.
        #[test]
        fn prop_cursor_always_in_bounds(commands in prop::collection::vec(0..11usize, 0..64)) {
            let mut mode = Mode::Title;
            let mut cursor = initial_cursor(mode);
            for index in commands {
                let t = handle_command(mode, cursor, ALL_COMMANDS[index]);
                mode = t.mode;
                cursor = t.cursor;
                if let Some((lo, hi)) = cursor_bounds(mode) {
                    prop_assert!(cursor >= lo && cursor <= hi,
                        "cursor {cursor} escaped [{lo}, {hi}] in {mode:?}");
                }
            }
        }

        /// The transition function is total: every mode/command pair yields
        /// exactly one resulting mode.
        #[test]
        fn prop_every_pair_is_handled(mode_idx in 0..8usize, cmd_idx in 0..11usize) {
            let mode = ALL_MODES[mode_idx];
            let cursor = initial_cursor(mode);
            let t = handle_command(mode, cursor, ALL_COMMANDS[cmd_idx]);
            prop_assert!(ALL_MODES.contains(&t.mode));
        }
    }
}
