//! Wire types shared between the browser client and the comparison server.

pub mod usecases;
