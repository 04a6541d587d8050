extern crate crc_rs as crc;
use crc::Crc32;
use log::LevelFilter;
use env_logger;

fn print_config(label: &str, crc: &Crc32) {
    println!("{}: {:08x} {:032b} Endianness: {}", label, crc.polynomial(), crc.polynomial(), crc.endianness());
}

fn print_state(label: &str, crc: &Crc32) {
    println!("{:<14} Crc32 value: {}  Byte Count: {}", label, crc, crc.byte_count());
}

fn exercise(crc: &mut Crc32) {
    print_state("Initial", crc);

    crc.add_byte(0x80);
    print_state("AddByte test", crc);
    crc.add_byte(0x00);
    print_state("AddByte test", crc);

    crc.reset();
    print_state("Reset test", crc);

    crc.add_bytes(&[0x80, 0x00]);
    print_state("AddBytes test", crc);
}

fn main() {
    log::set_max_level(LevelFilter::Trace);
    env_logger::init();

    let mut crc = Crc32::new();
    print_config("Polynomial", &crc);

    crc.flip_endianness();
    print_config("Flipped Polynomial", &crc);
    exercise(&mut crc);

    crc.flip_endianness();
    print_config("Flipped Polynomial", &crc);
    exercise(&mut crc);
}
