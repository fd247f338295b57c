#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

pub const HEADER_LEN: usize = 14;
pub const INFO_HEADER_LEN: usize = 40;
pub const PIXEL_OFFSET: usize = HEADER_LEN + INFO_HEADER_LEN;

/// Builds a 24-bit uncompressed bitmap with a BITMAPINFOHEADER. Rows are
/// padded to 4 bytes.
pub fn bitmap_24bit(width: u32, height: u32, pixel: impl Fn(u32, u32) -> [u8; 3]) -> Vec<u8> {
    let row_len = (width as usize * 3).div_ceil(4) * 4;
    let pixel_len = row_len * height as usize;
    let file_len = (PIXEL_OFFSET + pixel_len) as u32;

    let mut bytes = Vec::with_capacity(file_len as usize);
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&file_len.to_le_bytes());
    bytes.extend_from_slice(&[0, 0, 0, 0]);
    bytes.extend_from_slice(&(PIXEL_OFFSET as u32).to_le_bytes());

    bytes.extend_from_slice(&(INFO_HEADER_LEN as u32).to_le_bytes());
    bytes.extend_from_slice(&(width as i32).to_le_bytes());
    bytes.extend_from_slice(&(height as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes());
    bytes.extend_from_slice(&24u16.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&(pixel_len as u32).to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());

    for y in 0..height {
        let row_start = bytes.len();
        for x in 0..width {
            bytes.extend_from_slice(&pixel(x, y));
        }
        bytes.resize(row_start + row_len, 0);
    }
    bytes
}

pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bmp-grayscale"))
        .current_dir(dir)
        .env("RUST_LOG", "info")
        .args(args)
        .output()
        .expect("failed to launch bmp-grayscale")
}

pub fn files_in(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    files.sort();
    files
}
