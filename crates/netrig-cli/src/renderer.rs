//! Terminal rendering for provisioning transcripts
//!
//! Colors the section and error lines of a transcript; the plain fallback
//! keeps the text byte-for-byte identical to the transcript contract.

/// Terminal renderer that can switch between colored and plain text output
pub struct TerminalRenderer {
    color_enabled: bool,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(color_enabled: bool) -> Self {
        Self { color_enabled }
    }

    /// Render a transcript block to stdout
    pub fn render(&self, text: &str) {
        if self.color_enabled {
            for line in text.lines() {
                match line_color(line) {
                    Some(color) => println!("\x1b[{color}m{line}\x1b[0m"),
                    None => println!("{line}"),
                }
            }
        } else {
            print!("{text}");
        }
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

/// ANSI color code for a transcript line, if it gets one.
fn line_color(line: &str) -> Option<u8> {
    if line.starts_with("#####") {
        Some(34) // blue section banners
    } else if line.starts_with("ERROR:") {
        Some(31) // red diagnostics
    } else if line.starts_with("--") {
        Some(33) // yellow phase headers
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.color_enabled);
    }

    #[test]
    fn test_default_is_colored() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.color_enabled);
    }

    #[test]
    fn test_line_colors() {
        assert_eq!(line_color("###### Conectando a SW1 (10.10.12.2) ######"), Some(34));
        assert_eq!(line_color("##### Proceso de configuración completado #####"), Some(34));
        assert_eq!(line_color("ERROR: Timeout al conectar con SW2"), Some(31));
        assert_eq!(line_color("--- Aplicando configuración a SW1 ---"), Some(33));
        assert_eq!(line_color("-- Verificación en SW1 --"), Some(33));
        assert_eq!(line_color("Ejecutando: vlan 110"), None);
    }
}
