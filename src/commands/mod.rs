pub type CmdResult<T> = lessonscan::Result<(T, i32)>;

pub mod scan;
