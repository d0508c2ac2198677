pub mod messenger;
pub mod recipient;
pub mod renderer;
pub mod validator;
