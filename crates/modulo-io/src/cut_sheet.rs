use std::io::{self, Write};

use modulo_core::{cut_list, Design};

/// Plain-text cut sheet: a title line, then one line per piece.
pub struct CutSheetWriter<W: Write> {
    writer: W,
}

impl<W: Write> CutSheetWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write(&mut self, design: &Design) -> io::Result<usize> {
        let lines = cut_list(&design.shapes);
        writeln!(self.writer, "Lista de cortes: {}", design.name)?;
        if lines.is_empty() {
            writeln!(self.writer, "(sin módulos)")?;
        }
        for line in &lines {
            writeln!(self.writer, "{line}")?;
        }
        self.writer.flush()?;
        Ok(lines.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modulo_core::{Module, Point, Shape};

    #[test]
    fn test_sheet_lists_every_piece() {
        let mut design = Design::new("cocina").unwrap();
        design.add_shape(Shape::new(Module::from_type_name("cajonera"), Point::new(300.0, 205.0)));
        design.add_shape(Shape::new(Module::Cubierta, Point::new(280.0, 195.0)));

        let mut out = Vec::new();
        let count = CutSheetWriter::new(&mut out).write(&design).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(count, 4);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Lista de cortes: cocina");
        assert_eq!(lines[1], "- cajonera (3 cajones) | Frente: 100x23 CM (x3)");
        assert_eq!(lines[4], "- cubierta | Cubierta: 140x60 CM");
    }

    #[test]
    fn test_empty_design() {
        let design = Design::new("vacío").unwrap();
        let mut out = Vec::new();
        assert_eq!(CutSheetWriter::new(&mut out).write(&design).unwrap(), 0);
        assert!(String::from_utf8(out).unwrap().contains("(sin módulos)"));
    }
}
