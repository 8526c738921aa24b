//! Calculator
//!
//! Four-function calculator with a twist: dividing by zero, overflowing to
//! infinity or typing the configured crash number "blue-screens" it. The
//! only way out of the blue screen is `reset`.

use serde::{Deserialize, Serialize};

/// Longest number the display accepts
const MAX_DIGITS: usize = 15;

/// Why the calculator crashed
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StopCode {
    DivideByZero,
    ArithmeticOverflow,
    /// The configured crash input was evaluated
    UserInitiatedPanic,
}

impl StopCode {
    /// Text shown on the blue screen
    pub fn code(self) -> &'static str {
        match self {
            StopCode::DivideByZero => "DIVIDE_BY_ZERO",
            StopCode::ArithmeticOverflow => "ARITHMETIC_OVERFLOW",
            StopCode::UserInitiatedPanic => "USER_INITIATED_PANIC",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CalculatorConfig {
    /// Pressing equals with exactly this on the display crashes
    pub crash_input: Option<String>,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self { crash_input: Some("1337".to_string()) }
    }
}

/// What the front end renders
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorView {
    pub display: String,
    pub pending_op: Option<char>,
    pub bsod: Option<StopCode>,
}

#[derive(Clone, Debug)]
pub struct Calculator {
    config: CalculatorConfig,
    /// Current display value
    display: String,
    /// Left operand of the pending operation
    accumulator: f64,
    pending_op: Option<char>,
    /// Next digit starts a new number
    just_computed: bool,
    bsod: Option<StopCode>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            display: String::from("0"),
            accumulator: 0.0,
            pending_op: None,
            just_computed: false,
            bsod: None,
        }
    }

    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    #[inline]
    pub fn bsod(&self) -> Option<StopCode> {
        self.bsod
    }

    pub fn view(&self) -> CalculatorView {
        CalculatorView {
            display: self.display.clone(),
            pending_op: self.pending_op,
            bsod: self.bsod,
        }
    }

    /// Reboot out of any state, blue screen included
    pub fn reset(&mut self) {
        if let Some(code) = self.bsod {
            tracing::debug!(stop_code = code.code(), "calculator rebooted");
        }
        *self = Self::new(self.config.clone());
    }

    /// Handle a button by name; unknown names and any press while crashed are ignored
    pub fn press(&mut self, name: &str) {
        if self.bsod.is_some() {
            return;
        }

        match name {
            "digit_0" => self.digit('0'),
            "digit_1" => self.digit('1'),
            "digit_2" => self.digit('2'),
            "digit_3" => self.digit('3'),
            "digit_4" => self.digit('4'),
            "digit_5" => self.digit('5'),
            "digit_6" => self.digit('6'),
            "digit_7" => self.digit('7'),
            "digit_8" => self.digit('8'),
            "digit_9" => self.digit('9'),
            "decimal" => {
                if self.just_computed {
                    self.digit('0');
                }
                if !self.display.contains('.') {
                    self.display.push('.');
                }
            }

            "op_add" => self.operation('+'),
            "op_sub" => self.operation('-'),
            "op_mul" => self.operation('×'),
            "op_div" => self.operation('÷'),
            "op_equals" => self.equals(),

            "clear" => self.clear(),
            "clear_entry" => self.display = String::from("0"),
            "backspace" => {
                if !self.just_computed && self.display.len() > 1 {
                    self.display.pop();
                    if self.display == "-" {
                        self.display = String::from("0");
                    }
                } else {
                    self.display = String::from("0");
                }
            }
            "negate" => {
                if let Some(rest) = self.display.strip_prefix('-') {
                    self.display = rest.to_string();
                } else if self.display != "0" {
                    self.display = format!("-{}", self.display);
                }
            }

            _ => {}
        }
    }

    fn digit(&mut self, digit: char) {
        if self.just_computed || self.display == "0" {
            self.display.clear();
            self.just_computed = false;
        }
        if self.display.len() < MAX_DIGITS {
            self.display.push(digit);
        }
    }

    fn operation(&mut self, op: char) {
        // chained operations evaluate left to right
        if self.pending_op.is_some() && !self.just_computed {
            self.equals();
            if self.bsod.is_some() {
                return;
            }
        }

        if let Ok(value) = self.display.parse::<f64>() {
            self.accumulator = value;
            self.pending_op = Some(op);
            self.just_computed = true;
        }
    }

    fn equals(&mut self) {
        if self.config.crash_input.as_deref() == Some(self.display.as_str()) {
            self.crash(StopCode::UserInitiatedPanic);
            return;
        }

        let Some(op) = self.pending_op else {
            return;
        };
        let Ok(current) = self.display.parse::<f64>() else {
            return;
        };

        let result = match op {
            '+' => self.accumulator + current,
            '-' => self.accumulator - current,
            '×' => self.accumulator * current,
            '÷' => {
                if current == 0.0 {
                    self.crash(StopCode::DivideByZero);
                    return;
                }
                self.accumulator / current
            }
            _ => current,
        };

        if !result.is_finite() {
            self.crash(StopCode::ArithmeticOverflow);
            return;
        }

        self.display = format_number(result);
        self.accumulator = result;
        self.pending_op = None;
        self.just_computed = true;
    }

    fn clear(&mut self) {
        self.display = String::from("0");
        self.accumulator = 0.0;
        self.pending_op = None;
        self.just_computed = false;
    }

    fn crash(&mut self, code: StopCode) {
        tracing::debug!(stop_code = code.code(), "calculator crashed");
        self.bsod = Some(code);
        self.pending_op = None;
    }
}

fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let s = format!("{:.8}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}
