//! 输入校验服务 - 业务能力层
//!
//! 把原始文本转换成有界数值或非空字符串。无效输入只打印原因并重新提问，
//! 没有重试次数上限。

use crate::error::AppResult;
use crate::infrastructure::Console;
use std::io::{BufRead, Write};
use tracing::debug;

/// 读取 [min, max] 闭区间内的数字
pub fn prompt_number<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
    min: f64,
    max: f64,
) -> AppResult<f64> {
    loop {
        let raw = console.prompt(text)?;
        match raw.trim().parse::<f64>() {
            Ok(value) if (min..=max).contains(&value) => return Ok(value),
            Ok(value) => {
                debug!("数值超出范围: {}", value);
                console.say(format!("Please enter a number between {} and {}", min, max))?;
            }
            Err(_) => {
                debug!("无法解析为数字: {:?}", raw);
                console.say("Invalid input! Please enter numbers only.")?;
            }
        }
    }
}

/// 读取 0-100 之间的分数
pub fn prompt_mark<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
) -> AppResult<f64> {
    prompt_number(console, text, 0.0, 100.0)
}

/// 读取正整数
pub fn prompt_positive_int<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
) -> AppResult<usize> {
    loop {
        let raw = console.prompt(text)?;
        match raw.trim().parse::<i64>() {
            Ok(n) if n > 0 => match usize::try_from(n) {
                Ok(n) => return Ok(n),
                Err(_) => console.say("Invalid input! Enter a whole number.")?,
            },
            Ok(_) => console.say("Please enter a positive number!")?,
            Err(_) => {
                debug!("无法解析为整数: {:?}", raw);
                console.say("Invalid input! Enter a whole number.")?;
            }
        }
    }
}

/// 读取去掉首尾空白后非空的字符串
pub fn prompt_non_empty<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    text: &str,
) -> AppResult<String> {
    loop {
        let raw = console.prompt(text)?;
        let trimmed = raw.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
        console.say("Name cannot be empty!")?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::io::Cursor;

    fn console(input: &str) -> Console<Cursor<String>, Vec<u8>> {
        Console::new(Cursor::new(input.to_string()), Vec::new())
    }

    fn output(console: Console<Cursor<String>, Vec<u8>>) -> String {
        String::from_utf8(console.into_parts().1).unwrap()
    }

    #[test]
    fn test_prompt_number_retries_until_valid() {
        let mut c = console("abc\n101\n-1\n 72.5 \n");
        assert_eq!(prompt_mark(&mut c, "Math: ").unwrap(), 72.5);

        let out = output(c);
        assert_eq!(
            out,
            "Math: Invalid input! Please enter numbers only.\n\
             Math: Please enter a number between 0 and 100\n\
             Math: Please enter a number between 0 and 100\n\
             Math: "
        );
    }

    #[test]
    fn test_prompt_number_accepts_inclusive_bounds() {
        let mut c = console("0\n100\n");
        assert_eq!(prompt_mark(&mut c, "Math: ").unwrap(), 0.0);
        assert_eq!(prompt_mark(&mut c, "Math: ").unwrap(), 100.0);
    }

    #[test]
    fn test_prompt_number_rejects_nan_and_infinity() {
        let mut c = console("NaN\ninf\n50\n");
        assert_eq!(prompt_mark(&mut c, "Science: ").unwrap(), 50.0);
        assert_eq!(
            output(c).matches("Please enter a number between 0 and 100").count(),
            2
        );
    }

    #[test]
    fn test_prompt_positive_int_messages() {
        let mut c = console("two\n0\n-3\n2.5\n2\n");
        assert_eq!(prompt_positive_int(&mut c, "Enter number of students: ").unwrap(), 2);

        let out = output(c);
        assert_eq!(out.matches("Invalid input! Enter a whole number.").count(), 2);
        assert_eq!(out.matches("Please enter a positive number!").count(), 2);
    }

    #[test]
    fn test_prompt_non_empty_trims() {
        let mut c = console("\n   \n  Alice  \n");
        assert_eq!(prompt_non_empty(&mut c, "Student name: ").unwrap(), "Alice");
        assert_eq!(output(c).matches("Name cannot be empty!").count(), 2);
    }

    #[test]
    fn test_digit_separators_are_not_numbers() {
        let mut c = console("9_5\n95\n1_0\n10\n");
        assert_eq!(prompt_mark(&mut c, "Math: ").unwrap(), 95.0);
        assert_eq!(prompt_positive_int(&mut c, "Enter number of students: ").unwrap(), 10);

        let out = output(c);
        assert_eq!(out.matches("Invalid input! Please enter numbers only.").count(), 1);
        assert_eq!(out.matches("Invalid input! Enter a whole number.").count(), 1);
    }

    #[test]
    fn test_closed_input_stops_the_loop() {
        let mut c = console("oops\n");
        assert!(matches!(
            prompt_mark(&mut c, "English: "),
            Err(AppError::InputClosed)
        ));
    }
}
