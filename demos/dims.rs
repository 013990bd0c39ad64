use std::{env, fs};

use anyhow::{bail, Context};
use segsize::{ContainerFormat, LogTrace};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut format = &ContainerFormat::JPEG;
    let mut paths = Vec::new();
    for arg in env::args().skip(1) {
        match &*arg {
            "--any-sof" => format = &ContainerFormat::JPEG_ANY_SOF,
            _ => paths.push(arg),
        }
    }
    if paths.is_empty() {
        bail!("usage: dims [--any-sof] <file.jpg>...");
    }

    for path in paths {
        let bytes = fs::read(&path).with_context(|| format!("failed to read {path}"))?;
        match segsize::probe(&bytes, format, &mut LogTrace) {
            Ok(dims) => println!("{path}: {dims}"),
            Err(e) => println!("{path}: unknown ({e})"),
        }
    }

    Ok(())
}
