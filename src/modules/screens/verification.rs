use itertools::Itertools;

use crate::modules::gateway::{Channel, CodeDelivery, SentCode};
use crate::modules::utils::io::{prompt_with_confirmation, read_line};
use crate::modules::utils::logging::{log_flow_event, log_screen_event};
use crate::modules::utils::time::format_timestamp;
use crate::modules::widgets::code_entry::{CodeEntry, FocusController};
use crate::modules::widgets::resend_timer::ResendTimer;
use crate::modules::widgets::ClockSource;

/// Console-side focus controller: remembers which cell the caret is
/// rendered under
#[derive(Default)]
pub struct CellCursor {
    index: usize,
}

impl CellCursor {
    pub fn index(&self) -> usize {
        self.index
    }
}

impl FocusController for CellCursor {
    fn focus_cell(&mut self, index: usize) {
        self.index = index;
    }
}

/// Settings for one code-verification screen
pub struct VerificationOptions {
    pub screen_name: &'static str,
    pub title: &'static str,
    pub intro: &'static str,
    pub channel: Channel,
    pub code_length: usize,
    pub cooldown_secs: u32,
    pub max_attempts: u32,
    /// When false the screen submits as soon as the last cell fills;
    /// when true the user confirms with an empty line first
    pub explicit_submit: bool,
}

/// Result of running a verification screen
#[derive(Debug)]
pub enum VerificationOutcome {
    Verified(String), // The code the user confirmed
    Back,             // Return to the previous screen
    Exit,             // Exit the program
}

/// Feed one line of console input into the entry, one character at a
/// time. Digits land on the focused cell, '<' acts as backspace, and
/// anything else is rejected silently by the widget.
fn apply_input_line(entry: &mut CodeEntry, cursor: &mut CellCursor, line: &str) {
    for ch in line.chars() {
        let index = entry.focus_index();
        if ch == '<' {
            entry.on_backspace(index, cursor);
        } else {
            entry.on_digit(index, ch, cursor);
        }
    }
}

/// Render the cell row plus a caret marker under the focused cell
fn render_cells(entry: &CodeEntry, cursor: &CellCursor) -> String {
    let row = entry
        .cells()
        .iter()
        .map(|cell| format!("[{}]", cell.map_or('_', |d| d)))
        .join(" ");
    // Each cell occupies four columns ("[d] "); the caret sits under
    // the digit column of the focused cell
    let caret = format!("{}^", " ".repeat(cursor.index() * 4 + 1));
    format!("{}\n{}", row, caret)
}

/// Run a code-verification screen: deliver a code, collect the entry
/// cell by cell and gate resends behind the countdown
pub fn handle_verification_screen(
    options: &VerificationOptions,
    destination: &str,
    delivery: &mut dyn CodeDelivery,
    clock: &mut dyn ClockSource,
) -> Result<VerificationOutcome, String> {
    log_screen_event(options.screen_name, "enter");

    println!("\n=== {} ===", options.title);
    println!("{}", options.intro);

    let mut sent: SentCode = delivery.deliver(options.channel, destination)?;
    let mut entry = CodeEntry::new(options.code_length);
    let mut cursor = CellCursor::default();
    let mut timer = ResendTimer::start(options.cooldown_secs, clock);
    let mut attempts = 0;

    loop {
        timer.poll();

        println!();
        println!("{}", render_cells(&entry, &cursor));
        println!("Code sent at {}", format_timestamp(sent.sent_at));
        if timer.is_enabled() {
            println!("Didn't receive the code? Type 'resend' for a new one.");
        } else {
            println!("Resend in {}", timer.display());
        }
        println!("Type digits to fill cells, '<' to delete, Enter to submit, 'back' or 'exit'.");

        let line = read_line().map_err(|e| format!("Failed to read input: {}", e))?;

        match line.as_str() {
            "" => {
                if entry.is_complete() {
                    match check_submission(&mut entry, &mut cursor, &sent, &mut attempts, options) {
                        Some(outcome) => return Ok(outcome),
                        None => continue,
                    }
                }
                println!(
                    "Please enter all {} digits before submitting.",
                    options.code_length
                );
            }
            "resend" => {
                if timer.is_enabled() {
                    sent = delivery.deliver(options.channel, destination)?;
                    entry.reset(&mut cursor);
                    timer.restart(clock);
                    log_flow_event(options.screen_name, destination, true, Some("resend"));
                } else {
                    println!("Resend available in {}.", timer.display());
                }
            }
            "back" | "change" => {
                let confirmed =
                    prompt_with_confirmation("Leave this screen?", "Your entry will be discarded")
                        .map_err(|e| format!("Failed to read input: {}", e))?;
                if confirmed {
                    log_screen_event(options.screen_name, "back");
                    return Ok(VerificationOutcome::Back);
                }
            }
            "exit" | "quit" => {
                println!("Goodbye!");
                return Ok(VerificationOutcome::Exit);
            }
            other => {
                apply_input_line(&mut entry, &mut cursor, other);
                if !options.explicit_submit && entry.is_complete() {
                    match check_submission(&mut entry, &mut cursor, &sent, &mut attempts, options) {
                        Some(outcome) => return Ok(outcome),
                        None => continue,
                    }
                }
            }
        }
    }
}

/// Compare a complete entry against the delivered code. Returns the
/// screen outcome when the flow should leave the screen, or None to
/// keep collecting input.
fn check_submission(
    entry: &mut CodeEntry,
    cursor: &mut CellCursor,
    sent: &SentCode,
    attempts: &mut u32,
    options: &VerificationOptions,
) -> Option<VerificationOutcome> {
    let value = entry.value();
    if value == sent.code {
        println!("Code verified.");
        log_flow_event(options.screen_name, &value, true, Some("verified"));
        return Some(VerificationOutcome::Verified(value));
    }

    *attempts += 1;
    log_flow_event(options.screen_name, &value, false, Some("mismatch"));
    if *attempts >= options.max_attempts {
        println!("Too many incorrect codes. Returning to the previous step.");
        return Some(VerificationOutcome::Back);
    }

    println!(
        "That code doesn't match. {} attempts remaining.",
        options.max_attempts - *attempts
    );
    entry.reset(cursor);
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_line_fills_cells_in_focus_order() {
        let mut entry = CodeEntry::new(6);
        let mut cursor = CellCursor::default();

        apply_input_line(&mut entry, &mut cursor, "42");

        assert_eq!(entry.value(), "42");
        assert_eq!(entry.focus_index(), 2);
        assert_eq!(cursor.index(), 2);
        assert!(!entry.is_complete());
    }

    #[test]
    fn test_input_line_skips_non_digits() {
        let mut entry = CodeEntry::new(6);
        let mut cursor = CellCursor::default();

        apply_input_line(&mut entry, &mut cursor, "1a2-3 4x56");

        assert_eq!(entry.value(), "123456");
        assert!(entry.is_complete());
    }

    #[test]
    fn test_backspace_character_deletes_last_digit() {
        let mut entry = CodeEntry::new(6);
        let mut cursor = CellCursor::default();

        apply_input_line(&mut entry, &mut cursor, "12<");

        // '<' lands on the empty focused cell 2 and retreats to cell 1;
        // the digit there survives until the next '<'
        assert_eq!(entry.value(), "12");
        assert_eq!(cursor.index(), 1);

        apply_input_line(&mut entry, &mut cursor, "<");
        assert_eq!(entry.value(), "1");
    }

    #[test]
    fn test_cell_rendering_marks_focus() {
        let mut entry = CodeEntry::new(6);
        let mut cursor = CellCursor::default();
        apply_input_line(&mut entry, &mut cursor, "42");

        let rendered = render_cells(&entry, &cursor);
        assert_eq!(rendered, "[4] [2] [_] [_] [_] [_]\n         ^");
    }

    #[test]
    fn test_submission_accepts_matching_code() {
        let options = test_options();
        let mut entry = CodeEntry::new(6);
        let mut cursor = CellCursor::default();
        apply_input_line(&mut entry, &mut cursor, "123456");

        let sent = SentCode {
            code: "123456".to_string(),
            channel: Channel::Sms,
            sent_at: 0,
        };
        let mut attempts = 0;

        let outcome = check_submission(&mut entry, &mut cursor, &sent, &mut attempts, &options);
        assert!(matches!(
            outcome,
            Some(VerificationOutcome::Verified(code)) if code == "123456"
        ));
    }

    #[test]
    fn test_submission_limits_mismatched_attempts() {
        let options = test_options();
        let sent = SentCode {
            code: "654321".to_string(),
            channel: Channel::Email,
            sent_at: 0,
        };
        let mut attempts = 0;

        for round in 1..=3 {
            let mut entry = CodeEntry::new(6);
            let mut cursor = CellCursor::default();
            apply_input_line(&mut entry, &mut cursor, "111111");

            let outcome = check_submission(&mut entry, &mut cursor, &sent, &mut attempts, &options);
            if round < 3 {
                assert!(outcome.is_none());
                // Mismatch clears the entry for the next try
                assert!(entry.is_empty());
            } else {
                assert!(matches!(outcome, Some(VerificationOutcome::Back)));
            }
        }
        assert_eq!(attempts, 3);
    }

    fn test_options() -> VerificationOptions {
        VerificationOptions {
            screen_name: "otp",
            title: "Enter OTP code to verify",
            intro: "",
            channel: Channel::Sms,
            code_length: 6,
            cooldown_secs: 60,
            max_attempts: 3,
            explicit_submit: false,
        }
    }
}
