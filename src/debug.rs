// Debug logging module for Flapterm
// Routes `tracing` output to a file when enabled via --debug flag,
// since the TUI owns stdout while the game runs

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::SystemTime;

use tracing::Level;

/// Location of the debug log
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("flapterm-debug.log")
}

/// Initialize debug logging to file
///
/// # Arguments
/// * `enabled` - Whether debug logging should be enabled (controlled by --debug flag)
///
/// # Behavior
/// - If enabled=false: Returns immediately, no subscriber is installed and
///   every `tracing` macro is a no-op
/// - If enabled=true: Creates/truncates the log file, writes a header and
///   installs a fmt subscriber writing to it
pub fn init(enabled: bool) -> anyhow::Result<Option<PathBuf>> {
    if !enabled {
        return Ok(None);
    }

    let path = log_file_path();
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&path)?;

    write_header(&mut file, &path)?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_max_level(Level::TRACE)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))?;

    tracing::info!("flapterm debug logging initialized");
    Ok(Some(path))
}

fn write_header(out: &mut impl Write, path: &std::path::Path) -> io::Result<()> {
    writeln!(out, "=== Flapterm Debug Log ===")?;
    writeln!(out, "Session started: {:?}", SystemTime::now())?;
    writeln!(out, "To monitor: tail -f {}", path.display())?;
    writeln!(out, "========================================\n")?;
    Ok(())
}
