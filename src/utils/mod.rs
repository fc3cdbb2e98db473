//! Small helpers shared by the pipeline and the commands.

pub mod slug;
