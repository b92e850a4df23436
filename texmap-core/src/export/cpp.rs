//! C++ `constexpr` initializer output.

use std::io::{self, Write};

use crate::atlas::TextureMap;

#[derive(Debug, Clone, Copy, Default)]
pub struct CppOptions {
    /// Trailing `// 0bXXXX` comment on each row.
    pub annotate: bool,
}

/// Float literal with a mandatory decimal point and `f` suffix.
pub fn float_literal(v: f64) -> String {
    let mut s = format!("{}", v);
    if !s.contains('.') {
        s.push_str(".0");
    }
    s.push('f');
    s
}

pub fn write_texture_map<W: Write>(out: &mut W, map: &TextureMap, opts: CppOptions) -> io::Result<()> {
    writeln!(out, "constexpr TextureMap {}{{", map.name)?;
    for tc in &map.cells {
        let [a, b, c, d] = tc.corners.map(|p| format!("{{{}, {}}}", float_literal(p.x), float_literal(p.y)));
        write!(out, "    TexCoordCell{{{}, {}, {}, {}}},", a, b, c, d)?;
        if opts.annotate {
            write!(out, " // {:#06b}", tc.code)?;
        }
        writeln!(out)?;
    }
    writeln!(out, "}};")
}

pub fn render(map: &TextureMap, opts: CppOptions) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_texture_map(&mut buf, map, opts);
    String::from_utf8_lossy(&buf).into_owned()
}
