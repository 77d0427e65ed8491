pub mod did_key;
pub mod init;
pub mod inspect;
pub mod keygen;
pub mod sign;
pub mod verify;
