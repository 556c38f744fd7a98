use tracing::Level;
use tracing::Metadata;
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::Filter;
use tracing_subscriber::registry::LookupSpan;

use crate::constants::APP_NAME;

// Custom filter for error and warn levels coming from this crate
pub struct ErrorWarnFilter;

impl ErrorWarnFilter {
    pub fn accepts(meta: &Metadata<'_>) -> bool {
        (meta.level() == &Level::ERROR || meta.level() == &Level::WARN) && meta.target().starts_with(APP_NAME)
    }
}

impl<S> Filter<S> for ErrorWarnFilter
where
    S: tracing::Subscriber + for<'lookup> LookupSpan<'lookup>,
{
    fn enabled(
        &self,
        meta: &Metadata<'_>,
        _ctx: &Context<'_, S>,
    ) -> bool {
        Self::accepts(meta)
    }
}

#[cfg(test)]
mod tests {
    use std::io;
    use std::sync::Arc;
    use std::sync::Mutex;

    use tracing_subscriber::Layer;
    use tracing_subscriber::prelude::*;

    use super::*;
    use crate::tracing::format::MiazyFormat;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for Captured {
        fn write(
            &mut self,
            buf: &[u8],
        ) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn capture(emit: impl FnOnce()) -> String {
        let captured = Captured::default();
        let writer = captured.clone();
        let layer = tracing_subscriber::fmt::Layer::default()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .event_format(MiazyFormat {
                app_name: APP_NAME.to_string(),
            })
            .with_filter(ErrorWarnFilter);
        let subscriber = tracing_subscriber::registry().with(layer);

        tracing::subscriber::with_default(subscriber, emit);
        captured.contents()
    }

    #[test]
    fn keeps_only_warn_and_error_from_this_crate() {
        let output = capture(|| {
            tracing::warn!(target: "miazy::handler::home", "kept_warn");
            tracing::error!(target: "miazy", "kept_error");
            tracing::info!(target: "miazy::handler::home", "dropped_info");
            tracing::debug!(target: "miazy::handler::home", "dropped_debug");
            tracing::warn!(target: "hyper::client", "dropped_foreign");
        });

        assert!(output.contains("kept_warn"), "{}", output);
        assert!(output.contains("kept_error"), "{}", output);
        assert!(!output.contains("dropped"), "{}", output);
        assert_eq!(output.lines().count(), 2, "{}", output);
    }

    #[test]
    fn lines_follow_level_timestamp_app_file_line_layout() {
        let output = capture(|| tracing::warn!(target: "miazy::config", "config::missing"));

        let line = output.lines().next().unwrap();
        assert!(line.starts_with("WARN "), "{}", line);
        assert!(line.contains("::miazy::src/tracing/filter.rs::"), "{}", line);
        assert!(line.ends_with("::config::missing"), "{}", line);
    }
}
