//! Interactive menu loop
//!
//! [`App`] owns the record store and drives it from user answers. Probe,
//! prompter and output sink are all injected, so a whole session can be
//! scripted in tests without a terminal or any artificial delay.

use crate::{
    error::{AppError, Result},
    logging::StoreEventLogger,
    models::LatencyRecord,
    output::OutputFormatter,
    probe::LatencyProbe,
    prompt::Prompter,
    store::RecordStore,
};
use std::io::Write;
use std::str::FromStr;

/// Entries of the main menu, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddRecord,
    MeasureLatency,
    UpdateRecord,
    DeleteRecord,
    ShowRecords,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 6] = [
        MenuChoice::AddRecord,
        MenuChoice::MeasureLatency,
        MenuChoice::UpdateRecord,
        MenuChoice::DeleteRecord,
        MenuChoice::ShowRecords,
        MenuChoice::Quit,
    ];

    /// Number the user types to pick this entry
    pub fn number(&self) -> u8 {
        match self {
            Self::AddRecord => 1,
            Self::MeasureLatency => 2,
            Self::UpdateRecord => 3,
            Self::DeleteRecord => 4,
            Self::ShowRecords => 5,
            Self::Quit => 6,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::AddRecord => "Add new latency record",
            Self::MeasureLatency => "Measure latency",
            Self::UpdateRecord => "Update latency record",
            Self::DeleteRecord => "Delete latency record",
            Self::ShowRecords => "Show all records",
            Self::Quit => "Quit",
        }
    }
}

impl FromStr for MenuChoice {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|choice| trimmed == choice.number().to_string())
            .ok_or_else(|| AppError::invalid_input(format!("Unknown menu option '{}'", trimmed)))
    }
}

const INVALID_CHOICE: &str = "Invalid choice. Please choose an option between 1 and 6.";
const INVALID_INDEX: &str = "Error: Invalid index.";
const INVALID_UPDATE_INPUT: &str = "Error: Invalid input. Please enter numeric values for index and latency.";
const INVALID_DELETE_INPUT: &str = "Error: Invalid input. Please enter a numeric index.";
const GOODBYE: &str = "Exiting Network Latency Tester. Goodbye!";

/// Interactive latency record manager
pub struct App<P, I, W> {
    store: RecordStore,
    probe: P,
    prompter: I,
    out: W,
    formatter: Box<dyn OutputFormatter>,
    events: StoreEventLogger,
}

/// Whether the loop should keep going after an action
enum Flow {
    Continue,
    Exit,
}

impl<P, I, W> App<P, I, W>
where
    P: LatencyProbe,
    I: Prompter,
    W: Write,
{
    /// Create an application with an empty store
    pub fn new(
        probe: P,
        prompter: I,
        out: W,
        formatter: Box<dyn OutputFormatter>,
        events: StoreEventLogger,
    ) -> Self {
        Self {
            store: RecordStore::new(),
            probe,
            prompter,
            out,
            formatter,
            events,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn events(&self) -> &StoreEventLogger {
        &self.events
    }

    /// Hand back the output sink, e.g. to inspect a scripted session
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu until the user quits or input runs out
    pub fn run(&mut self) -> Result<()> {
        crate::log_debug!(self.events.logger(), "Menu loop started");

        loop {
            self.show_menu()?;

            let answer = match self.ask("Choose an option (1-6)")? {
                Some(answer) => answer,
                None => {
                    crate::log_info!(self.events.logger(), "Input closed, leaving menu");
                    return Ok(());
                }
            };

            let flow = match answer.parse::<MenuChoice>() {
                Ok(choice) => self.dispatch(choice)?,
                Err(_) => {
                    let message = self.formatter.format_error(INVALID_CHOICE);
                    self.say(&message)?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                crate::log_info!(self.events.logger(), "Session ended with {} record(s)", self.store.len());
                return Ok(());
            }
        }
    }

    /// Execute one menu choice
    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        match choice {
            MenuChoice::AddRecord => self.add_record()?,
            MenuChoice::MeasureLatency => self.measure_only()?,
            MenuChoice::UpdateRecord => self.update_record()?,
            MenuChoice::DeleteRecord => self.delete_record()?,
            MenuChoice::ShowRecords => self.show_records()?,
            MenuChoice::Quit => {
                let message = self.formatter.format_info(GOODBYE);
                self.say(&message)?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    fn show_menu(&mut self) -> Result<()> {
        let items: Vec<(u8, &str)> = MenuChoice::ALL
            .iter()
            .map(|choice| (choice.number(), choice.label()))
            .collect();
        let text = format!("{}\n{}", self.formatter.format_header(), self.formatter.format_menu(&items));
        self.say(&text)
    }

    fn add_record(&mut self) -> Result<()> {
        let Some(source) = self.ask("Enter the source location")? else {
            return Ok(());
        };
        let Some(record) = self.simulate(&source)? else {
            return Ok(());
        };

        self.events.log_measurement(record.source(), record.latency_ms(), true);
        let message = format!(
            "\n{} {}",
            self.formatter.format_success("Record added:"),
            self.formatter.format_record(&record)
        );
        self.events.log_record_added(self.store.len(), &record);
        self.store.add(record);
        self.say(&message)
    }

    fn measure_only(&mut self) -> Result<()> {
        let Some(source) = self.ask("Enter the source location")? else {
            return Ok(());
        };
        let Some(record) = self.simulate(&source)? else {
            return Ok(());
        };

        self.events.log_measurement(record.source(), record.latency_ms(), false);
        let message = format!(
            "\n{} {}",
            self.formatter.format_success("Latency measured:"),
            self.formatter.format_record(&record)
        );
        self.say(&message)
    }

    /// Run the probe with progress messages; probe failures are reported, not propagated
    fn simulate(&mut self, source: &str) -> Result<Option<LatencyRecord>> {
        let notice = self.formatter.format_progress(&format!("Simulating latency for {}...", source));
        self.say(&notice)?;

        match self.probe.measure(source) {
            Ok(latency) => {
                let done = self.formatter.format_success(&format!("Simulated latency: {} ms for {}", latency, source));
                self.say(&done)?;
                Ok(Some(LatencyRecord::new(source, latency)))
            }
            Err(error) => {
                self.events.log_error(&error, "measurement");
                let message = self.formatter.format_error(&error.to_string());
                self.say(&message)?;
                Ok(None)
            }
        }
    }

    fn update_record(&mut self) -> Result<()> {
        if self.store.is_empty() {
            let message = self.formatter.format_error("No records to update. Add a record first.");
            return self.say(&message);
        }

        let Some(raw_index) = self.ask("Enter the index of the record to update")? else {
            return Ok(());
        };
        let index = match parse_index(&raw_index) {
            Ok(index) => index,
            Err(error) => return self.report_input_error(&error, INVALID_UPDATE_INPUT, "update"),
        };

        let Some(source) = self.ask("Enter the source location")? else {
            return Ok(());
        };
        let Some(raw_latency) = self.ask("Enter the new latency (ms)")? else {
            return Ok(());
        };
        let latency = match parse_latency(&raw_latency) {
            Ok(latency) => latency,
            Err(error) => return self.report_input_error(&error, INVALID_UPDATE_INPUT, "update"),
        };

        let record = LatencyRecord::new(source, latency);
        let replaced = match index {
            Some(index) => {
                let replaced = self.store.replace(index, record.clone());
                self.events.log_record_replaced(index, &record, replaced);
                replaced
            }
            None => false,
        };

        let message = match (replaced, index) {
            (true, Some(index)) => self.formatter.format_success(&format!("Record at index {} updated successfully.", index)),
            _ => self.formatter.format_error(INVALID_INDEX),
        };
        self.say(&message)
    }

    fn delete_record(&mut self) -> Result<()> {
        if self.store.is_empty() {
            let message = self.formatter.format_error("No records to delete. Add a record first.");
            return self.say(&message);
        }

        let Some(raw_index) = self.ask("Enter the index of the record to delete")? else {
            return Ok(());
        };
        let index = match parse_index(&raw_index) {
            Ok(index) => index,
            Err(error) => return self.report_input_error(&error, INVALID_DELETE_INPUT, "delete"),
        };

        let removed = match index {
            Some(index) => {
                let removed = self.store.remove(index);
                self.events.log_record_removed(index, removed);
                removed
            }
            None => false,
        };

        let message = match (removed, index) {
            (true, Some(index)) => self.formatter.format_success(&format!("Record at index {} deleted successfully.", index)),
            _ => self.formatter.format_error(INVALID_INDEX),
        };
        self.say(&message)
    }

    fn show_records(&mut self) -> Result<()> {
        let listing = self.formatter.format_listing(&self.store);
        self.say(&format!("\n{}", listing))
    }

    fn report_input_error(&mut self, error: &AppError, message: &str, context: &str) -> Result<()> {
        self.events.log_error(error, context);
        let message = self.formatter.format_error(message);
        self.say(&message)
    }

    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        Ok(self.prompter.ask(prompt)?.map(|answer| answer.trim().to_string()))
    }

    fn say(&mut self, text: &str) -> Result<()> {
        writeln!(self.out, "{}", text)
            .map_err(|e| AppError::io(format!("Failed to write output: {}", e)))
    }
}

/// Parse a record index typed by the user
///
/// Non-numeric text is invalid input. A negative number is well-formed but can
/// never address a record, so it comes back as `None`.
pub fn parse_index(input: &str) -> Result<Option<usize>> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_input(format!("'{}' is not a whole number", input.trim())))?;
    Ok(usize::try_from(value).ok())
}

/// Parse a latency value typed by the user
pub fn parse_latency(input: &str) -> Result<i64> {
    input
        .trim()
        .parse()
        .map_err(|_| AppError::invalid_input(format!("'{}' is not a whole number of milliseconds", input.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Config;
    use crate::output::PlainFormatter;
    use crate::probe::FixedProbe;
    use crate::prompt::LinePrompter;
    use std::io::{self, Cursor};

    type TestApp<P> = App<P, LinePrompter<Cursor<String>, io::Sink>, Vec<u8>>;

    fn app_with<P: LatencyProbe>(probe: P, script: &str) -> TestApp<P> {
        App::new(
            probe,
            LinePrompter::new(Cursor::new(script.to_string()), io::sink(), false),
            Vec::new(),
            Box::new(PlainFormatter::default()),
            StoreEventLogger::new(&Config::default()),
        )
    }

    fn run_script(script: &str) -> (RecordStore, String) {
        let mut app = app_with(FixedProbe(42), script);
        app.run().unwrap();
        let store = app.store().clone();
        (store, String::from_utf8(app.into_output()).unwrap())
    }

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("1".parse::<MenuChoice>().unwrap(), MenuChoice::AddRecord);
        assert_eq!(" 6 ".parse::<MenuChoice>().unwrap(), MenuChoice::Quit);
        assert!("7".parse::<MenuChoice>().is_err());
        assert!("".parse::<MenuChoice>().is_err());
        assert!("quit".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_menu_numbers_are_sequential() {
        let numbers: Vec<u8> = MenuChoice::ALL.iter().map(|c| c.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_parse_index() {
        assert_eq!(parse_index("3").unwrap(), Some(3));
        assert_eq!(parse_index(" 0 ").unwrap(), Some(0));
        assert_eq!(parse_index("-1").unwrap(), None);
        assert!(matches!(parse_index("abc"), Err(AppError::InvalidInput(_))));
        assert!(parse_index("1.5").is_err());
    }

    #[test]
    fn test_parse_latency() {
        assert_eq!(parse_latency("75").unwrap(), 75);
        assert_eq!(parse_latency("-20").unwrap(), -20);
        assert!(matches!(parse_latency("fast"), Err(AppError::InvalidInput(_))));
    }

    #[test]
    fn test_quit_prints_goodbye() {
        let (store, output) = run_script("6\n");
        assert!(store.is_empty());
        assert!(output.contains("1. Add new latency record"));
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (_, output) = run_script("");
        assert!(!output.contains(GOODBYE));
        assert!(output.contains("Network Latency Tester"));
    }

    #[test]
    fn test_add_record_stores_probe_value() {
        let (store, output) = run_script("1\nNew York\n6\n");
        assert_eq!(store.len(), 1);
        let record = store.get(0).unwrap();
        assert_eq!(record.source(), "New York");
        assert_eq!(record.latency_ms(), 42);
        assert!(output.contains("Simulating latency for New York..."));
        assert!(output.contains("Simulated latency: 42 ms for New York"));
        assert!(output.contains("Record added: Latency for New York: 42ms"));
    }

    #[test]
    fn test_measure_does_not_store() {
        let (store, output) = run_script("2\nParis\n6\n");
        assert!(store.is_empty());
        assert!(output.contains("Latency measured: Latency for Paris: 42ms"));
    }

    #[test]
    fn test_probe_receives_source() {
        let mut app = app_with(|source: &str| source.len() as i64 * 10, "1\nRome\n6\n");
        app.run().unwrap();
        assert_eq!(app.store().get(0).unwrap().latency_ms(), 40);
    }

    #[test]
    fn test_probe_failure_is_reported_and_loop_continues() {
        struct Broken;
        impl LatencyProbe for Broken {
            fn measure(&mut self, _source: &str) -> Result<i64> {
                Err(AppError::measurement("sensor offline"))
            }
        }

        let mut app = app_with(Broken, "1\nOslo\n6\n");
        app.run().unwrap();
        assert!(app.store().is_empty());
        let output = String::from_utf8(app.into_output()).unwrap();
        assert!(output.contains("Measurement error: sensor offline"));
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn test_update_on_empty_store() {
        let (_, output) = run_script("3\n6\n");
        assert!(output.contains("No records to update. Add a record first."));
    }

    #[test]
    fn test_update_replaces_record() {
        let (store, output) = run_script("1\nNew York\n3\n0\nLos Angeles\n75\n6\n");
        assert_eq!(store.len(), 1);
        let record = store.get(0).unwrap();
        assert_eq!(record.source(), "Los Angeles");
        assert_eq!(record.latency_ms(), 75);
        assert!(output.contains("Record at index 0 updated successfully."));
    }

    #[test]
    fn test_update_with_bad_index() {
        let (store, output) = run_script("1\nA\n3\n5\nB\n10\n3\n-1\nC\n10\n6\n");
        assert_eq!(store.get(0).unwrap().source(), "A");
        assert_eq!(output.matches(INVALID_INDEX).count(), 2);
    }

    #[test]
    fn test_update_with_non_numeric_values() {
        let (store, output) = run_script("1\nA\n3\nx\n3\n0\nB\nfast\n6\n");
        assert_eq!(store.get(0).unwrap().source(), "A");
        assert_eq!(output.matches(INVALID_UPDATE_INPUT).count(), 2);
    }

    #[test]
    fn test_delete_flow() {
        let (store, output) = run_script("4\n1\nA\n1\nB\n4\nzero\n4\n9\n4\n0\n6\n");
        assert!(output.contains("No records to delete. Add a record first."));
        assert!(output.contains(INVALID_DELETE_INPUT));
        assert!(output.contains(INVALID_INDEX));
        assert!(output.contains("Record at index 0 deleted successfully."));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().source(), "B");
    }

    #[test]
    fn test_show_records() {
        let (_, output) = run_script("5\n1\nNYC\n1\nLA\n5\n6\n");
        assert!(output.contains("No records available."));
        assert!(output.contains("Displaying all records:"));
        assert!(output.contains("[0] Latency for NYC: 42ms"));
        assert!(output.contains("[1] Latency for LA: 42ms"));
    }

    #[test]
    fn test_badly_encoded_input_is_not_fatal() {
        let script: &[u8] = b"1\n\xff\xfe\n3\n\xff\n\xfe\n5\n6\n";
        let mut app = App::new(
            FixedProbe(42),
            LinePrompter::new(Cursor::new(script), io::sink(), false),
            Vec::new(),
            Box::new(PlainFormatter::default()),
            StoreEventLogger::new(&Config::default()),
        );

        app.run().unwrap();
        assert_eq!(app.store().len(), 1);
        assert_eq!(app.store().get(0).unwrap().source(), "\u{FFFD}\u{FFFD}");

        let output = String::from_utf8(app.into_output()).unwrap();
        assert!(output.contains(INVALID_UPDATE_INPUT));
        assert_eq!(output.matches(INVALID_CHOICE).count(), 1);
        assert!(output.contains("[0] Latency for \u{FFFD}\u{FFFD}: 42ms"));
        assert!(output.contains(GOODBYE));
    }

    #[test]
    fn test_invalid_choice() {
        let (_, output) = run_script("9\nhello\n\n6\n");
        assert_eq!(output.matches(INVALID_CHOICE).count(), 3);
    }

    #[test]
    fn test_input_ending_mid_action() {
        let (store, _) = run_script("1\nA\n3\n0\nB\n");
        assert_eq!(store.get(0).unwrap().source(), "A");
    }
}
