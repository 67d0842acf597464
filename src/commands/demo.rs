use crate::core::{brute_force, decrypt, encrypt};
use crate::formatting::OutputFormatter;
use anyhow::Result;
use std::io::Write;

const DEMO_TEXT: &str = "Hello, World! This is a Caesar Cipher demonstration.";
const DEMO_SHIFT: i64 = 7;
const DEMO_CIPHERTEXT: &str = "Uryyb, Jbeyq!";

/// Encrypt and decrypt a sample sentence, then brute force a ROT13 message
pub fn run_demo(out: &mut dyn Write, formatter: &dyn OutputFormatter) -> Result<()> {
    writeln!(out, "{}", formatter.header("=== Caesar Cipher Demonstration ==="))?;
    writeln!(out, "Original text: {}", DEMO_TEXT)?;
    writeln!(out, "Shift value: {}", DEMO_SHIFT)?;

    let encrypted = encrypt(DEMO_TEXT, DEMO_SHIFT);
    writeln!(out, "Encrypted: {}", encrypted)?;

    let decrypted = decrypt(&encrypted, DEMO_SHIFT);
    writeln!(out, "Decrypted: {}", decrypted)?;

    let verified = decrypted == DEMO_TEXT;
    let status = if verified {
        formatter.success("true")
    } else {
        formatter.error("false")
    };
    writeln!(out, "Verification: {}", status)?;

    writeln!(out)?;
    writeln!(out, "{}", formatter.header("=== Brute Force Attack Demo ==="))?;
    writeln!(out, "Attacking: {}", DEMO_CIPHERTEXT)?;
    for candidate in brute_force(DEMO_CIPHERTEXT) {
        writeln!(out, "Shift {:2}: {}", candidate.shift, candidate.text)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formatting::PlainFormatter;

    #[test]
    fn test_demo_output() {
        let mut buffer = Vec::new();
        run_demo(&mut buffer, &PlainFormatter).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("=== Caesar Cipher Demonstration ===\n"));
        assert!(output.contains(
            "Encrypted: Olssv, Dvysk! Aopz pz h Jhlzhy Jpwoly kltvuzayhapvu.\n"
        ));
        assert!(output.contains("Verification: true\n"));
        assert!(output.contains("Shift 13: Hello, World!\n"));
        let candidates: Vec<&str> = output
            .lines()
            .skip_while(|l| !l.starts_with("Attacking:"))
            .skip(1)
            .collect();
        assert_eq!(candidates.len(), 26);
        assert!(candidates.iter().all(|l| l.starts_with("Shift ")));
        assert_eq!(candidates[0], "Shift  0: Uryyb, Jbeyq!");
    }
}
