use std::borrow::Cow;

/// Render a command the way it would be typed in a shell, for diagnostics only
pub fn command_to_string(cmd: &std::process::Command) -> String {
    let program = cmd.get_program().to_string_lossy();
    std::iter::once(program)
        .chain(cmd.get_args().map(|arg| arg.to_string_lossy()))
        .map(quote_if_needed)
        .collect::<Vec<_>>()
        .join(" ")
}

fn quote_if_needed(arg: Cow<'_, str>) -> Cow<'_, str> {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:,+@%".contains(c));
    if plain {
        arg
    } else {
        Cow::Owned(format!("'{}'", arg.replace('\'', "'\\''")))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::process::Command;

    #[test]
    fn test_plain_arguments() {
        let mut cmd = Command::new("snakemake");
        cmd.args(["--use-conda", "--cores", "4"]);
        assert_eq!(command_to_string(&cmd), "snakemake --use-conda --cores 4");
    }

    #[test]
    fn test_quoted_arguments() {
        let mut cmd = Command::new("/opt/my tools/snakemake");
        cmd.arg("it's");
        assert_eq!(
            command_to_string(&cmd),
            "'/opt/my tools/snakemake' 'it'\\''s'"
        );
    }
}
