// Purpose - external interfaces, byte-level sample formats

pub mod codec;
