//! Controlling terminal size via `TIOCGWINSZ`.

/// `(columns, rows)` of the terminal on stdout, falling back to stdin.
/// `None` when neither is a terminal.
#[cfg(unix)]
pub fn size() -> Option<(u32, u32)> {
    [libc::STDOUT_FILENO, libc::STDIN_FILENO]
        .into_iter()
        .find_map(winsize)
}

#[cfg(not(unix))]
pub fn size() -> Option<(u32, u32)> {
    None
}

#[cfg(unix)]
fn winsize(fd: libc::c_int) -> Option<(u32, u32)> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };
    // SAFETY: TIOCGWINSZ only writes into the winsize struct we pass.
    let res = unsafe { libc::ioctl(fd, libc::TIOCGWINSZ, &mut ws) };
    if res == 0 && ws.ws_col > 0 && ws.ws_row > 0 {
        Some((ws.ws_col as u32, ws.ws_row as u32))
    } else {
        None
    }
}
