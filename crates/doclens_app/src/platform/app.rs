use std::io::{self, BufRead, Write};

use anyhow::Context;
use doclens_core::{submit, update, AnalysisService, Msg, SessionState};
use doclens_engine::EngineHandle;
use doclens_logging::{doclens_debug, doclens_info};

use super::config::AppConfig;
use super::logging;
use super::ui::commands::{parse_command, Command};
use super::ui::{constants, render};

pub fn run_app() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    logging::initialize(config.log);
    doclens_info!(
        "doclens_app starting (endpoint configured: {}, timeout {}s)",
        config.endpoint.is_some(),
        config.timeout_secs
    );

    let engine =
        EngineHandle::new(config.client_settings()).context("failed to start analysis engine")?;
    let mut session = Session::new(engine);

    let stdin = io::stdin();
    let stdout = io::stdout();
    session.run(stdin.lock(), stdout.lock())?;
    doclens_info!("doclens_app exiting");
    Ok(())
}

enum Flow {
    Continue,
    Quit,
}

/// One interactive session: owns its state and the service it submits to.
struct Session<S> {
    state: SessionState,
    service: S,
}

impl<S: AnalysisService> Session<S> {
    fn new(service: S) -> Self {
        Self {
            state: SessionState::new(),
            service,
        }
    }

    fn run(&mut self, input: impl BufRead, mut output: impl Write) -> io::Result<()> {
        writeln!(output, "{}", constants::BANNER)?;
        for line in constants::HELP {
            writeln!(output, "{line}")?;
        }
        self.render(&mut output)?;

        let mut lines = input.lines();
        loop {
            write!(output, "{}", constants::PROMPT)?;
            output.flush()?;
            let Some(line) = lines.next() else {
                writeln!(output)?;
                break;
            };
            if let Flow::Quit = self.handle_line(&line?, &mut output)? {
                break;
            }
        }
        Ok(())
    }

    fn handle_line(&mut self, line: &str, output: &mut impl Write) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(Some(command)) => command,
            Ok(None) => return Ok(Flow::Continue),
            Err(err) => {
                writeln!(output, "{err}")?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Edit(msg) => {
                if let Some(problem) = self.out_of_range(&msg) {
                    writeln!(output, "{problem}")?;
                    return Ok(Flow::Continue);
                }
                self.dispatch(msg);
                if self.state.consume_dirty() {
                    self.render(output)?;
                }
            }
            Command::Submit => self.submit(output)?,
            Command::Show => self.render(output)?,
            Command::Help => {
                for line in constants::HELP {
                    writeln!(output, "{line}")?;
                }
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Question numbers must refer to an existing slot.
    fn out_of_range(&self, msg: &Msg) -> Option<String> {
        let count = self.state.questions().len();
        let index = match msg {
            Msg::QuestionEdited { index, .. } | Msg::QuestionRemoved(index) => *index,
            _ => return None,
        };
        (index >= count).then(|| format!("there is no question {} (1..={count})", index + 1))
    }

    fn dispatch(&mut self, msg: Msg) {
        doclens_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, _effects) = update(state, msg);
        self.state = state;
    }

    fn submit(&mut self, output: &mut impl Write) -> io::Result<()> {
        if !self.state.view().submit_enabled {
            writeln!(output, "A request is already being processed.")?;
            return Ok(());
        }
        writeln!(output, "{}", constants::PROCESSING)?;
        output.flush()?;

        let state = std::mem::take(&mut self.state);
        let (state, result) = submit(state, &self.service);
        self.state = state;
        doclens_debug!("submit finished: {:?}", result);

        self.state.consume_dirty();
        self.render(output)
    }

    fn render(&self, output: &mut impl Write) -> io::Result<()> {
        for line in render::render(&self.state.view()) {
            writeln!(output, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::io::Cursor;

    use doclens_core::{RequestPayload, ServiceFailure};

    use super::*;

    struct Canned {
        reply: Result<Vec<String>, ServiceFailure>,
        calls: Cell<usize>,
    }

    impl Canned {
        fn new(reply: Result<Vec<String>, ServiceFailure>) -> Self {
            Self {
                reply,
                calls: Cell::new(0),
            }
        }
    }

    impl AnalysisService for Canned {
        fn analyze(&self, _payload: &RequestPayload) -> Result<Vec<String>, ServiceFailure> {
            self.calls.set(self.calls.get() + 1);
            self.reply.clone()
        }
    }

    fn run_script(service: Canned, script: &str) -> (Session<Canned>, String) {
        let mut session = Session::new(service);
        let mut output = Vec::new();
        session
            .run(Cursor::new(script.to_string()), &mut output)
            .unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn scripted_session_submits_and_shows_answers() {
        let service = Canned::new(Ok(vec!["A1".to_string(), "A2".to_string()]));
        let script = "url https://example.com/doc.pdf\nq 1 Q1\nadd\nq 2 Q2\nsubmit\nquit\n";

        let (session, output) = run_script(service, script);

        assert_eq!(session.service.calls.get(), 1);
        assert_eq!(session.state.answers(), ["A1".to_string(), "A2".to_string()]);
        assert!(output.contains(constants::PROCESSING));
        assert!(output.contains("[ok] Document processed successfully!"));
        assert!(output.contains("  Question 2: Q2"));
        assert!(output.contains("  Answer: A2"));
    }

    #[test]
    fn local_rejection_does_not_call_the_service() {
        let service = Canned::new(Ok(vec!["unused".to_string()]));

        let (session, output) = run_script(service, "q 1 Q1\nsubmit\n");

        assert_eq!(session.service.calls.get(), 0);
        assert!(output.contains("[error] Please enter a valid PDF URL"));
        assert!(!session.state.is_processing());
    }

    #[test]
    fn connection_errors_print_guidance() {
        let service = Canned::new(Err(ServiceFailure::Transport("refused".to_string())));
        let script = "url https://example.com/doc.pdf\nq 1 Q1\nsubmit\n";

        let (_session, output) = run_script(service, script);

        assert!(output.contains("[error] Connection error: refused"));
        assert!(output.contains("[info] Please ensure the analysis service"));
    }

    #[test]
    fn out_of_range_numbers_change_nothing() {
        let service = Canned::new(Ok(Vec::new()));

        let (session, output) = run_script(service, "rm 3\nq 2 hello\n");

        assert!(output.contains("there is no question 3 (1..=1)"));
        assert!(output.contains("there is no question 2 (1..=1)"));
        assert_eq!(session.state.questions().len(), 1);
        assert_eq!(session.state.questions().get(0), Some(""));
    }

    #[test]
    fn input_end_leaves_the_loop() {
        let service = Canned::new(Ok(Vec::new()));
        let (_session, output) = run_script(service, "add\n");
        assert!(output.contains("  2. (blank)"));
    }
}
