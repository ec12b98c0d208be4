use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use colored::Colorize;
use mos6502::{Cpu, Ram, Variant};

/// Disassemble a raw 6502 binary image.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The raw binary image to disassemble
    file: PathBuf,

    /// Which CPU model's opcode table to use
    #[arg(long, value_enum, default_value = "6502")]
    cpu: CpuModel,

    /// Load (and start) address of the image, e.g. 0x8000 or $8000
    #[arg(long, default_value = "0x8000", value_parser = parse_address)]
    origin: u16,

    /// Stop after this many instructions instead of the end of the image
    #[arg(long)]
    count: Option<usize>,

    /// Label definitions of the form NAME=ADDR, repeatable
    #[arg(long = "label", value_parser = parse_label)]
    labels: Vec<(String, u16)>,
}

#[derive(Clone, Copy, ValueEnum)]
enum CpuModel {
    #[value(name = "6502")]
    Nmos6502,
    #[value(name = "6502u")]
    Nmos6502Undocumented,
    #[value(name = "65c02")]
    Cmos65C02,
    #[value(name = "w65c02")]
    Wdc65C02,
    #[value(name = "r65c02")]
    Rockwell65C02,
}

impl From<CpuModel> for Variant {
    fn from(model: CpuModel) -> Variant {
        match model {
            CpuModel::Nmos6502 => Variant::Nmos6502,
            CpuModel::Nmos6502Undocumented => Variant::Nmos6502Undocumented,
            CpuModel::Cmos65C02 => Variant::Cmos65C02,
            CpuModel::Wdc65C02 => Variant::Wdc65C02,
            CpuModel::Rockwell65C02 => Variant::Rockwell65C02,
        }
    }
}

fn parse_address(text: &str) -> Result<u16, String> {
    let digits = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("$"))
        .unwrap_or(text);
    let radix = if digits.len() == text.len() { 10 } else { 16 };
    u16::from_str_radix(digits, radix)
        .map_err(|e| format!("invalid address {:?}: {}", text, e))
}

fn parse_label(text: &str) -> Result<(String, u16), String> {
    let (name, addr) = text
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=ADDR, got {:?}", text))?;
    Ok((name.to_string(), parse_address(addr)?))
}

fn main() -> Result<(), String> {
    simple_logger::init_with_level(log::Level::Warn).map_err(|e| e.to_string())?;

    let cli = Cli::parse();

    let image = fs::read(&cli.file)
        .map_err(|e| format!("failed to read {}: {}", cli.file.display(), e))?;
    if image.len() > 0x10000 {
        return Err(format!(
            "image is {} bytes; the address space only holds 65536",
            image.len()
        ));
    }

    let ram = Ram::with_program(cli.origin, &image);
    let cpu = Cpu::new(Variant::from(cli.cpu), Box::new(ram));

    let labels: HashMap<u16, String> = cli
        .labels
        .into_iter()
        .map(|(name, addr)| (addr, name))
        .collect();
    let labels = if labels.is_empty() {
        None
    } else {
        Some(&labels)
    };

    let end = cli.origin as usize + image.len();
    let mut addr = cli.origin;
    let mut printed = 0;
    while (addr as usize) < end && cli.count.map_or(true, |count| printed < count) {
        let disassembly = cpu.disassemble(addr, labels);
        let bytes: Vec<String> = (addr..disassembly.next_addr)
            .map(|a| format!("{:02x}", cpu.peek_u8(a)))
            .collect();
        println!(
            "{}  {:8}  {}",
            format!("{:04x}:", addr).dimmed(),
            bytes.join(" "),
            disassembly.text.green()
        );
        if disassembly.next_addr <= addr {
            // Wrapped past the top of the address space.
            break;
        }
        addr = disassembly.next_addr;
        printed += 1;
    }

    Ok(())
}
