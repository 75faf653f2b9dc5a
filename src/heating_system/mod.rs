pub mod convective;
pub mod heat_flux;
pub mod radiative;
