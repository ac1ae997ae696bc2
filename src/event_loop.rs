use std::io;
use std::time::Duration;

use crossterm::event::Event;

use crate::drivers::InputDriver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Owns the UI thread: polls the input driver and hands each event to a
/// handler closure.
///
/// The handler is called with:
/// - `Some(event)` when an input event occurs.
/// - `None` once per iteration before polling, which is where the caller
///   redraws.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    pub fn driver(&mut self) -> &mut D {
        &mut self.driver
    }

    pub fn run<F>(&mut self, mut handler: F) -> io::Result<()>
    where
        F: FnMut(&mut D, Option<Event>) -> io::Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                break;
            }

            if self.driver.poll(self.poll_interval)? {
                // Drain bursts (mouse drags) before the next redraw.
                loop {
                    let event = self.driver.read()?;
                    if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                        return Ok(());
                    }
                    if !self.driver.poll(Duration::from_millis(0))? {
                        break;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::collections::VecDeque;

    struct Scripted {
        events: VecDeque<Event>,
        polls: usize,
    }

    impl InputDriver for Scripted {
        fn poll(&mut self, _timeout: Duration) -> io::Result<bool> {
            self.polls += 1;
            Ok(!self.events.is_empty())
        }

        fn read(&mut self) -> io::Result<Event> {
            self.events
                .pop_front()
                .ok_or_else(|| io::Error::other("script exhausted"))
        }
    }

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    #[test]
    fn drains_burst_then_redraws() {
        let driver = Scripted {
            events: VecDeque::from([key('a'), key('b'), key('q')]),
            polls: 0,
        };
        let mut ev = EventLoop::new(driver, Duration::from_millis(1));
        let mut seen = Vec::new();
        let mut redraws = 0;
        ev.run(|_, event| match event {
            None => {
                redraws += 1;
                Ok(ControlFlow::Continue)
            }
            Some(Event::Key(k)) if k.code == KeyCode::Char('q') => Ok(ControlFlow::Quit),
            Some(other) => {
                seen.push(other);
                Ok(ControlFlow::Continue)
            }
        })
        .expect("loop ends cleanly");
        assert_eq!(seen, vec![key('a'), key('b')]);
        assert_eq!(redraws, 1);
    }

    #[test]
    fn quit_on_idle_tick() {
        let driver = Scripted {
            events: VecDeque::new(),
            polls: 0,
        };
        let mut ev = EventLoop::new(driver, Duration::from_millis(1));
        ev.run(|_, _| Ok(ControlFlow::Quit)).expect("loop ends");
        assert_eq!(ev.driver().polls, 0);
    }
}
