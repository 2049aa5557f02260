//! 答案判定
//!
//! 宽松匹配：忽略大小写与首尾空白，任一方向的子串包含都算正确

/// 规范化后相等，或输入包含答案，或答案包含输入
pub fn fuzzy_match(input: &str, target: &str) -> bool {
    let input = normalize(input);
    let target = normalize(target);
    input == target || input.contains(&target) || target.contains(&input)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
