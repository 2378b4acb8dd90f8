//! End-to-end flows through the wired application core.

mod chat_tests;
mod session_tests;
