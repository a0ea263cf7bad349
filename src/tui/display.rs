//! 启动模式判断

/// 是否运行交互模式（无参数时启用）
pub fn should_run_interactive() -> bool {
    is_interactive_invocation(std::env::args_os().len())
}

fn is_interactive_invocation(arg_count: usize) -> bool {
    arg_count <= 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_program_name_is_interactive() {
        assert!(is_interactive_invocation(1));
        assert!(!is_interactive_invocation(2));
    }
}
