//! docval - CPF/CNPJ validation and the account records built on it.

pub mod cli;
pub mod commands;
pub mod container;
pub mod output;
