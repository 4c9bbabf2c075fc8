pub type CmdResult<T> = recase::Result<(T, i32)>;

pub mod rewrite;
