//! Dice formula rendering ("3d6", "2d8+3", "1d20-1").

/// Render a signed modifier as a suffix: "+3", "-1", or "" for zero.
pub fn format_modifier(modifier: i32) -> String {
    match modifier {
        0 => String::new(),
        m if m > 0 => format!("+{m}"),
        m => format!("-{}", m.unsigned_abs()),
    }
}

/// Render `count` dice of `sides` faces with an optional flat modifier.
pub fn format_formula(count: u32, sides: u32, modifier: i32) -> String {
    format!("{count}d{sides}{}", format_modifier(modifier))
}

/// Render a list of face values as "[a, b, c]".
pub fn format_rolls(rolls: &[u32]) -> String {
    let values: Vec<String> = rolls.iter().map(|v| v.to_string()).collect();
    format!("[{}]", values.join(", "))
}
