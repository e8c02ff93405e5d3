/// Pointer capture requests sent to the windowing layer
///
/// Implementations must tolerate repeated calls. The camera only calls
/// them on actual state transitions.
pub trait CursorSink {
    /// Hide the pointer and lock it to the window
    fn lock_cursor(&mut self);

    /// Show the pointer and free it
    fn release_cursor(&mut self);
}

/// Sink that ignores every request (headless hosts, benchmarks)
#[derive(Debug, Default, Clone, Copy)]
pub struct NullCursor;

impl CursorSink for NullCursor {
    fn lock_cursor(&mut self) {}

    fn release_cursor(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock sink counting requests
    #[derive(Default)]
    struct MockCursor {
        locks: usize,
        releases: usize,
    }

    impl CursorSink for MockCursor {
        fn lock_cursor(&mut self) {
            self.locks += 1;
        }

        fn release_cursor(&mut self) {
            self.releases += 1;
        }
    }

    #[test]
    fn test_sink_as_trait_object() {
        let mut mock = MockCursor::default();
        {
            let sink: &mut dyn CursorSink = &mut mock;
            sink.lock_cursor();
            sink.release_cursor();
            sink.release_cursor();
        }
        assert_eq!(mock.locks, 1);
        assert_eq!(mock.releases, 2);
    }

    #[test]
    fn test_null_cursor_accepts_requests() {
        let mut sink = NullCursor;
        sink.lock_cursor();
        sink.release_cursor();
    }
}
