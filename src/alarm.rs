use std::io::{self, Write};
use std::thread;
use std::time::Duration;

const BEEP_COUNT: u32 = 3;
const BEEP_SPACING: Duration = Duration::from_millis(600);

/// Play the expiry alarm: three short beeps, 600 ms apart.
///
/// Fire-and-forget on a detached thread so the event loop never blocks on
/// audio. A reset mid-sequence does not cancel the remaining beeps; they run
/// out on their own. If the terminal cannot be written to, the failure is
/// logged as a warning and swallowed.
pub fn ring() {
    thread::spawn(|| {
        for i in 0..BEEP_COUNT {
            if i > 0 {
                thread::sleep(BEEP_SPACING);
            }
            if let Err(e) = beep() {
                log::warn!("alarm beep failed: {}", e);
                return;
            }
        }
    });
}

fn beep() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x07")?;
    stdout.flush()
}
