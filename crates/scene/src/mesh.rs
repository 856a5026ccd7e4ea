use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Triangle mesh carried alongside the view graph. Filtering never touches
/// its geometry; it is only re-exported next to the saved scene.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<[f32; 3]>,
    pub faces: Vec<[u32; 3]>,
}

impl Mesh {
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Writes the mesh as ASCII PLY.
    pub fn save_ply(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        writeln!(w, "ply")?;
        writeln!(w, "format ascii 1.0")?;
        writeln!(w, "element vertex {}", self.vertices.len())?;
        writeln!(w, "property float x")?;
        writeln!(w, "property float y")?;
        writeln!(w, "property float z")?;
        writeln!(w, "element face {}", self.faces.len())?;
        writeln!(w, "property list uchar uint vertex_indices")?;
        writeln!(w, "end_header")?;
        for v in &self.vertices {
            writeln!(w, "{} {} {}", v[0], v[1], v[2])?;
        }
        for f in &self.faces {
            writeln!(w, "3 {} {} {}", f[0], f[1], f[2])?;
        }
        w.flush()
    }

    /// Writes the mesh as Wavefront OBJ. Face indices are 1-based.
    pub fn save_obj(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        for v in &self.vertices {
            writeln!(w, "v {} {} {}", v[0], v[1], v[2])?;
        }
        for f in &self.faces {
            writeln!(w, "f {} {} {}", f[0] + 1, f[1] + 1, f[2] + 1)?;
        }
        w.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn triangle() -> Mesh {
        Mesh {
            vertices: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            faces: vec![[0, 1, 2]],
        }
    }

    #[test]
    fn ply_header_matches_counts() {
        let path = std::env::temp_dir().join("viewfilter_mesh_header.ply");
        triangle().save_ply(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("ply\nformat ascii 1.0\n"));
        assert!(text.contains("element vertex 3\n"));
        assert!(text.contains("element face 1\n"));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn obj_faces_are_one_based() {
        let path = std::env::temp_dir().join("viewfilter_mesh_faces.obj");
        triangle().save_obj(&path).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.ends_with("f 1 2 3\n"));
        fs::remove_file(&path).unwrap();
    }
}
