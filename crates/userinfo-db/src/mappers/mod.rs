//! Model → entity mappers

mod user;
