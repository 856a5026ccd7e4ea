use viewfilter_scene::{Neighbor, Scene, View};

pub fn view(name: &str, neighbors: &[(u32, f32)]) -> View {
    View {
        name: name.to_string(),
        neighbors: neighbors
            .iter()
            .map(|&(view, score)| Neighbor { view, score })
            .collect(),
    }
}

pub fn scene(views: Vec<View>) -> Scene {
    Scene {
        views,
        ..Default::default()
    }
}

pub fn names(views: &[View]) -> Vec<&str> {
    views.iter().map(|v| v.name.as_str()).collect()
}
