//! 输入状态

use unicode_width::UnicodeWidthStr;

/// 掩码字符
const MASK_CHAR: char = '•';

/// 单行文本输入（光标按字节偏移，始终位于字符边界）
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    buffer: String,
    cursor: usize,
}

impl InputState {
    /// 新建输入状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用初始值创建，光标位于末尾
    pub fn with_value(value: &str) -> Self {
        Self {
            buffer: value.to_string(),
            cursor: value.len(),
        }
    }

    /// 清空输入
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// 插入字符（忽略控制字符）
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// 插入粘贴文本，换行被丢弃
    pub fn insert_str(&mut self, text: &str) {
        for c in text.chars() {
            self.insert_char(c);
        }
    }

    fn prev_len(&self) -> usize {
        self.buffer[..self.cursor]
            .chars()
            .last()
            .map(char::len_utf8)
            .unwrap_or(0)
    }

    fn next_len(&self) -> usize {
        self.buffer[self.cursor..]
            .chars()
            .next()
            .map(char::len_utf8)
            .unwrap_or(0)
    }

    /// 删除光标前字符
    pub fn delete_before_cursor(&mut self) {
        let len = self.prev_len();
        if len > 0 {
            self.cursor -= len;
            self.buffer.drain(self.cursor..self.cursor + len);
        }
    }

    /// 删除光标后字符
    pub fn delete_after_cursor(&mut self) {
        let len = self.next_len();
        if len > 0 {
            self.buffer.drain(self.cursor..self.cursor + len);
        }
    }

    /// 光标左移
    pub fn move_cursor_left(&mut self) {
        self.cursor -= self.prev_len();
    }

    /// 光标右移
    pub fn move_cursor_right(&mut self) {
        self.cursor += self.next_len();
    }

    pub fn move_cursor_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_to_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    /// 光标可视列（掩码时按字符数计）
    pub fn visual_cursor_position(&self, masked: bool) -> usize {
        let before = &self.buffer[..self.cursor];
        if masked {
            before.chars().count()
        } else {
            before.width()
        }
    }

    /// 当前值
    pub fn value(&self) -> &str {
        &self.buffer
    }

    /// 显示文本；敏感字段只保留最后四位
    pub fn display(&self, masked: bool) -> String {
        if masked {
            mask_all_but_last_four(&self.buffer)
        } else {
            self.buffer.clone()
        }
    }
}

/// 除最后四个字符外全部替换为掩码
pub fn mask_all_but_last_four(value: &str) -> String {
    let total = value.chars().count();
    value
        .chars()
        .enumerate()
        .map(|(i, c)| if i + 4 < total { MASK_CHAR } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edit_multibyte() {
        let mut input = InputState::with_value("咖啡");
        input.move_cursor_left();
        input.insert_char('x');
        assert_eq!(input.value(), "咖x啡");
        assert_eq!(input.visual_cursor_position(false), 3);

        input.delete_before_cursor();
        input.delete_after_cursor();
        assert_eq!(input.value(), "咖");
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut input = InputState::new();
        input.delete_before_cursor();
        input.delete_after_cursor();
        input.move_cursor_left();
        input.move_cursor_right();
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_paste_skips_newlines() {
        let mut input = InputState::new();
        input.insert_str("4111 1111\n");
        assert_eq!(input.value(), "4111 1111");
    }

    #[test]
    fn test_masked_display() {
        let input = InputState::with_value("4111111111111111");
        assert_eq!(input.display(true), "••••••••••••1111");
        assert_eq!(InputState::with_value("123").display(true), "123");
        assert_eq!(input.visual_cursor_position(true), 16);
    }
}
