use crate::*;

/// Ask for n, then for the 2n slice values on one line.
pub fn prompt() -> anyhow::Result<Vec<Value>> {
    let n = dialoguer::Input::<usize>::new()
        .with_prompt("n (the cake has 2n slices)")
        .interact_text()?;
    let line = dialoguer::Input::<String>::new()
        .with_prompt(format!("{} slice values separated by spaces", 2 * n))
        .interact_text()?;
    parse(&line, 2 * n)
}

/// Whitespace-separated integers, exactly `expected` of them.
pub fn parse(line: &str, expected: usize) -> anyhow::Result<Vec<Value>> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<Value>()
                .map_err(|e| anyhow::anyhow!("invalid slice value {:?}: {}", token, e))
        })
        .collect::<anyhow::Result<Vec<Value>>>()?;
    if values.len() != expected {
        anyhow::bail!("expected {} values, received {}", expected, values.len());
    }
    Ok(values)
}
