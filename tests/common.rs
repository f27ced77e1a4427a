#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use rollcall::config::Config;
use rollcall::core::{Collector, Console};
use rollcall::models::Sheet;
use std::io::Cursor;
use std::path::Path;

/// `rollcall` binary with HOME pointed at `home`, so no user config is read.
pub fn rc(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rollcall");
    cmd.env("HOME", home).env_remove("ROLLCALL_LOG");
    cmd
}

/// `rollcall-sheet` binary running inside `dir`.
pub fn sheet_cmd(dir: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("rollcall-sheet");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("ROLLCALL_LOG");
    cmd
}

/// Console fed from a script, capturing everything it prints.
pub fn scripted(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

pub fn collector<'c>(
    input: &str,
    cfg: &'c Config,
) -> Collector<'c, Cursor<Vec<u8>>, Vec<u8>> {
    Collector::new(scripted(input), cfg)
}

/// Text printed so far by a scripted collector.
pub fn printed(collector: Collector<'_, Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(collector.into_console().into_output()).expect("utf-8 output")
}

pub fn sheet(headers: &[&str], rows: &[&[&str]]) -> Sheet {
    let mut sheet = Sheet::new(headers.iter().map(|h| h.to_string()).collect());
    for row in rows {
        sheet.push_row(row.iter().map(|v| v.to_string()).collect());
    }
    sheet
}
