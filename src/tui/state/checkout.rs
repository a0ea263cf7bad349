//! 结账向导的界面状态
//!
//! 向导本身（步骤、校验、提交）在 `crate::checkout`，这里只管理
//! 当前聚焦字段与输入框。

use crate::checkout::{AdvanceOutcome, CheckoutField, CheckoutWizard};
use crate::tui::state::input::InputState;

/// 结账界面状态
#[derive(Debug, Clone, Default)]
pub struct CheckoutState {
    /// 结账向导
    pub wizard: CheckoutWizard,
    /// 当前步骤内聚焦字段索引
    pub focus: usize,
    /// 聚焦字段的输入框
    pub input: InputState,
    /// 页面级提示（如提交失败）
    pub banner: Option<String>,
}

impl CheckoutState {
    /// 新的结账流程
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前步骤拥有的字段
    pub fn fields(&self) -> &'static [CheckoutField] {
        self.wizard.current_step().owned_fields()
    }

    /// 聚焦字段；确认步骤没有字段
    pub fn focused_field(&self) -> Option<CheckoutField> {
        self.fields().get(self.focus).copied()
    }

    fn load_input(&mut self) {
        self.input = match self.focused_field() {
            Some(field) => InputState::with_value(self.wizard.form().value(field)),
            None => InputState::new(),
        };
    }

    /// 聚焦到指定字段（必须属于当前步骤）
    pub fn focus_field(&mut self, field: CheckoutField) {
        if let Some(pos) = self.fields().iter().position(|f| *f == field) {
            self.focus = pos;
            self.load_input();
        }
    }

    /// 下一个字段
    pub fn focus_next(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + 1) % count;
            self.load_input();
        }
    }

    /// 上一个字段
    pub fn focus_prev(&mut self) {
        let count = self.fields().len();
        if count > 0 {
            self.focus = (self.focus + count - 1) % count;
            self.load_input();
        }
    }

    /// 将输入框内容写回表单
    pub fn commit_input(&mut self) {
        if let Some(field) = self.focused_field() {
            self.wizard.set_field(field, self.input.value());
        }
    }

    /// 校验并前进；失败时聚焦第一个错误字段
    pub fn advance(&mut self) -> AdvanceOutcome {
        self.commit_input();
        let outcome = self.wizard.advance();
        match &outcome {
            AdvanceOutcome::Advanced { .. } => {
                self.focus = 0;
                self.load_input();
            }
            AdvanceOutcome::Blocked { errors, .. } => {
                if let Some(first) = errors.first() {
                    self.focus_field(first.field);
                }
            }
            AdvanceOutcome::AtTerminal => {}
        }
        outcome
    }

    /// 返回上一步；在第一步时返回 false
    pub fn retreat(&mut self) -> bool {
        self.commit_input();
        let moved = self.wizard.retreat();
        if moved {
            self.focus = 0;
            self.load_input();
            self.banner = None;
        }
        moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checkout::CheckoutStep;

    fn type_into(state: &mut CheckoutState, text: &str) {
        state.input.insert_str(text);
        state.commit_input();
    }

    #[test]
    fn test_typing_updates_form() {
        let mut state = CheckoutState::new();
        assert_eq!(state.focused_field(), Some(CheckoutField::Name));
        type_into(&mut state, "Jane Doe");
        state.focus_next();
        type_into(&mut state, "1 Orbit Way");
        assert_eq!(state.wizard.form().value(CheckoutField::Name), "Jane Doe");
        assert_eq!(state.wizard.form().value(CheckoutField::Address), "1 Orbit Way");

        state.focus_prev();
        assert_eq!(state.input.value(), "Jane Doe");
    }

    #[test]
    fn test_blocked_focuses_first_error() {
        let mut state = CheckoutState::new();
        type_into(&mut state, "Jane Doe");
        state.focus_next();
        type_into(&mut state, "1 Orbit Way");
        state.focus_next();
        type_into(&mut state, "Luna");
        state.focus_next();
        type_into(&mut state, "1234");

        state.focus_field(CheckoutField::Name);
        let outcome = state.advance();
        assert!(matches!(outcome, AdvanceOutcome::Blocked { .. }));
        assert_eq!(state.focused_field(), Some(CheckoutField::ZipCode));
        assert_eq!(state.wizard.current_step(), CheckoutStep::Delivery);

        state.input.insert_char('5');
        let outcome = state.advance();
        assert!(matches!(outcome, AdvanceOutcome::Advanced { .. }));
        assert_eq!(state.focused_field(), Some(CheckoutField::CardNumber));

        assert!(state.retreat());
        assert_eq!(state.input.value(), "Jane Doe");
        assert!(!state.retreat());
    }
}
