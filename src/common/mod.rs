pub mod distro;
pub mod launch;
