use super::{Command, MenuConfig, MenuError};
use crate::deque::LinkedQueue;
use crate::error::Status;

use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Read-eval loop over a [`LinkedQueue`]. Holds no state beyond the queue and its settings.
pub struct QueueMenu<T> {
    queue: LinkedQueue<T>,
    config: MenuConfig,
}

fn check(status: Status) -> Result<(), MenuError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(MenuError::Failed(status))
    }
}

impl<T> QueueMenu<T> {
    pub fn new(config: MenuConfig) -> Self {
        Self {
            queue: LinkedQueue::new(),
            config,
        }
    }

    pub fn with_queue(queue: LinkedQueue<T>, config: MenuConfig) -> Self {
        Self { queue, config }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn queue(&self) -> &LinkedQueue<T> {
        &self.queue
    }

    pub fn queue_mut(&mut self) -> &mut LinkedQueue<T> {
        &mut self.queue
    }

    pub fn into_queue(self) -> LinkedQueue<T> {
        self.queue
    }
}

impl<T> QueueMenu<T>
where
    T: FromStr + Display,
    T::Err: Display,
{
    /// Reads and executes lines until `input` is exhausted.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> io::Result<()> {
        tracing::info!(prompt = %self.config.prompt, "queue menu started");
        if self.config.banner {
            write!(output, "{}", MenuConfig::operations_help())?;
        }

        let mut line = String::new();
        let mut count = 0usize;
        loop {
            write!(output, "{}", self.config.prompt)?;
            output.flush()?;

            line.clear();
            if input.read_line(&mut line)? == 0 {
                break;
            }
            count += 1;
            self.execute(&line, &mut output)?;
        }

        output.flush()?;
        tracing::info!(lines = count, len = self.queue.len(), "queue menu finished");
        Ok(())
    }

    /// Executes one line. Rejected input and failed operations are reported on `out`;
    /// only I/O errors on `out` itself are returned.
    pub fn execute<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<()> {
        match self.dispatch(line, out) {
            Ok(()) => Ok(()),
            Err(MenuError::Io(err)) => Err(err),
            Err(err) => {
                tracing::warn!(error = %err, input = line.trim(), "command failed");
                writeln!(out, "Error: {}", err)
            }
        }
    }

    fn dispatch<W: Write>(&mut self, line: &str, out: &mut W) -> Result<(), MenuError> {
        let command = match Command::<T>::parse(line)? {
            Some(command) => command,
            None => return Ok(()),
        };
        tracing::debug!(operation = command.operation().name(), "dispatch");

        match command {
            Command::Length => writeln!(out, "Queue length: {}", self.queue.len())?,
            Command::GetFirst => writeln!(out, "First element: {}", self.queue.front()?)?,
            Command::GetLast => writeln!(out, "Last element: {}", self.queue.back()?)?,
            Command::Get { position } => {
                let elem = self.queue.get(position)?;
                writeln!(out, "Element at position {}: {}", position, elem)?
            }
            Command::Push { value } => {
                let msg = format!("{} pushed into queue.", value);
                check(self.queue.push(value))?;
                writeln!(out, "{}", msg)?
            }
            Command::PushAt { position, value } => {
                let msg = format!("{} pushed into queue at position {}.", value, position);
                check(self.queue.push_at(position, value))?;
                writeln!(out, "{}", msg)?
            }
            Command::Pop => {
                check(self.queue.pop())?;
                writeln!(out, "Popped first element.")?
            }
            Command::PopAt { position } => {
                check(self.queue.pop_at(position))?;
                writeln!(out, "Popped element at position {}.", position)?
            }
            Command::PopBatch { count } => {
                check(self.queue.pop_batch(count))?;
                writeln!(out, "Popped {} elements.", count)?
            }
            Command::Clear => {
                check(self.queue.clear())?;
                writeln!(out, "Queue cleared.")?
            }
            Command::Print => check(self.queue.print_to(out)?)?,
            Command::ReversePrint => check(self.queue.reverse_print_to(out)?)?,
            Command::Undefined(token) => {
                tracing::debug!(token = %token, "undefined operation ignored");
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::QueueMenu;
    use crate::deque::LinkedQueue;
    use crate::menu::MenuConfig;

    fn quiet() -> MenuConfig {
        MenuConfig {
            prompt: String::new(),
            banner: false,
            ..MenuConfig::default()
        }
    }

    fn session(menu: &mut QueueMenu<i64>, input: &str) -> String {
        let mut out = Vec::new();
        menu.run(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_session() {
        let mut menu = QueueMenu::new(quiet());
        let out = session(
            &mut menu,
            "push 10\npush 20\npush 30\nlength\ngetfirst\ngetlast\nget 1\n",
        );
        assert_eq!(
            out,
            "10 pushed into queue.\n\
             20 pushed into queue.\n\
             30 pushed into queue.\n\
             Queue length: 3\n\
             First element: 10\n\
             Last element: 30\n\
             Element at position 1: 20\n"
        );

        assert!(menu.queue_mut().clear().is_success());
        assert!(menu.queue().is_empty());
    }

    #[test]
    fn test_positional_commands() {
        let mut menu = QueueMenu::with_queue((1..=3).collect(), quiet());
        let out = session(&mut menu, "pushpos 1 99\nprint\npoppos 2\nreverseprint\n");
        assert_eq!(
            out,
            "99 pushed into queue at position 1.\n\
             1\n99\n2\n3\n\
             Popped element at position 2.\n\
             3\n99\n1\n"
        );
        assert_eq!(menu.queue().len(), 3);
    }

    #[test]
    fn test_batch_and_clear() {
        let mut menu = QueueMenu::with_queue(vec![5, 6, 7].into_iter().collect(), quiet());
        let out = session(&mut menu, "popbatch 2\nprint\npop\nclear\n");
        assert_eq!(
            out,
            "Popped 2 elements.\n7\nPopped first element.\nError: queue is empty\n"
        );
        assert!(menu.queue().is_empty());
    }

    #[test]
    fn test_errors_do_not_stop_the_loop() {
        let mut menu = QueueMenu::new(quiet());
        let out = session(
            &mut menu,
            "getfirst\npop\nprint\nget x\npush\npoppos -1\nbogus 1 2\n\npush 4\nget 1\n",
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "Error: queue is empty");
        assert_eq!(lines[1], "Error: queue is empty");
        assert_eq!(lines[2], "Error: queue is empty");
        assert!(lines[3].starts_with("Error: invalid argument 'x' for <position>"));
        assert_eq!(lines[4], "Error: missing argument <value> for 'push'");
        assert_eq!(lines[5], "Error: <position> must not be negative, got -1");
        assert_eq!(lines[6], "4 pushed into queue.");
        assert_eq!(
            lines[7],
            "Error: position 1 is out of bounds for queue of length 1"
        );
        assert_eq!(lines.len(), 8);
        assert_eq!(menu.into_queue(), vec![4].into_iter().collect::<LinkedQueue<_>>());
    }

    #[test]
    fn test_failed_status_messages() {
        let mut menu = QueueMenu::with_queue(vec![1, 2].into_iter().collect(), quiet());
        let out = session(&mut menu, "pushpos 5 1\npopbatch 3\npoppos 2\n");
        assert_eq!(
            out,
            "Error: position is out of bounds\n\
             Error: position is out of bounds\n\
             Error: position is out of bounds\n"
        );
    }

    #[test]
    fn test_prompt_and_banner() {
        let config = MenuConfig {
            prompt: "> ".to_string(),
            ..MenuConfig::default()
        };
        let mut menu: QueueMenu<i64> = QueueMenu::new(config);
        assert_eq!(menu.config().prompt, "> ");
        assert!(menu.config().banner);
        let out = session(&mut menu, "length\n");
        assert!(out.starts_with("operations:\n"));
        assert!(out.ends_with("> Queue length: 0\n> "));
    }

    #[test]
    fn test_string_elements() {
        let mut menu: QueueMenu<String> = QueueMenu::new(quiet());
        let mut out = Vec::new();
        menu.execute("push hello", &mut out).unwrap();
        menu.execute("push world", &mut out).unwrap();
        menu.execute("getlast", &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "hello pushed into queue.\nworld pushed into queue.\nLast element: world\n"
        );
        assert_eq!(menu.queue().front().map(String::as_str), Ok("hello"));
    }
}
