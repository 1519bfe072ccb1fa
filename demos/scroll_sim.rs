// Example: a simulated vertical scroll over a 50-item list.
use recycler::{Point, Recycler, RecyclerOptions, SceneEvent, SceneGraph, ScrollContainer, Size};

#[derive(Clone)]
struct Node {
    world: Point,
    size: Size,
    active: bool,
    opacity: f32,
    children: Vec<usize>,
}

/// A toy scene: node 0 is the view (300 px tall), node 1 the content (5000 px of rows).
/// Scrolling moves the view's world position across the fixed content.
struct Scene {
    nodes: Vec<Node>,
    scroll: f32,
}

impl Scene {
    fn new(rows: usize, row_height: f32) -> Self {
        let mut nodes = vec![
            Node {
                world: Point::ZERO,
                size: Size::new(300.0, 300.0),
                active: true,
                opacity: 1.0,
                children: Vec::new(),
            },
            Node {
                world: Point::ZERO,
                size: Size::new(300.0, rows as f32 * row_height),
                active: true,
                opacity: 1.0,
                children: Vec::new(),
            },
        ];
        for i in 0..rows {
            let id = nodes.len();
            nodes.push(Node {
                world: Point::new(0.0, i as f32 * row_height),
                size: Size::new(300.0, row_height),
                active: true,
                opacity: 1.0,
                children: Vec::new(),
            });
            nodes[1].children.push(id);
        }
        Self { nodes, scroll: 0.0 }
    }

    fn visible_rows(&self) -> usize {
        self.nodes[1]
            .children
            .iter()
            .filter(|&&id| self.nodes[id].opacity > 0.0)
            .count()
    }
}

impl SceneGraph for Scene {
    type NodeId = usize;

    fn is_valid(&self, node: usize) -> bool {
        node < self.nodes.len()
    }
    fn is_active(&self, node: usize) -> bool {
        self.nodes[node].active
    }
    fn set_active(&mut self, node: usize, active: bool) {
        self.nodes[node].active = active;
    }
    fn opacity(&self, node: usize) -> f32 {
        self.nodes[node].opacity
    }
    fn set_opacity(&mut self, node: usize, opacity: f32) {
        self.nodes[node].opacity = opacity;
    }
    fn child_count(&self, node: usize) -> usize {
        self.nodes[node].children.len()
    }
    fn child_at(&self, node: usize, index: usize) -> Option<usize> {
        self.nodes[node].children.get(index).copied()
    }
    fn bounding_size(&self, node: usize) -> Size {
        self.nodes[node].size
    }
    fn anchor(&self, _node: usize) -> Point {
        Point::ZERO
    }
    fn to_world(&self, node: usize, local: Point) -> Point {
        let w = self.nodes[node].world;
        Point::new(w.x + local.x, w.y + local.y)
    }
    fn to_local(&self, node: usize, world: Point) -> Point {
        let w = self.nodes[node].world;
        Point::new(world.x - w.x, world.y - w.y)
    }
}

impl ScrollContainer for Scene {
    fn view_node(&self) -> Option<usize> {
        Some(0)
    }
    fn content_node(&self) -> Option<usize> {
        Some(1)
    }
    fn horizontal(&self) -> bool {
        false
    }
    fn content_position(&self) -> Point {
        Point::new(0.0, -self.scroll)
    }
}

fn main() {
    let mut scene = Scene::new(50, 100.0);
    let mut rec = Recycler::new(RecyclerOptions::new().with_warmup_delay_ms(0));

    let mut now = 0u64;
    rec.attach(&scene, now);
    rec.tick(&mut scene, now);
    println!("managed={} visible={}", rec.managed_len(), scene.visible_rows());

    // Scroll down at 600 px/s for two seconds, one frame at a time.
    for _ in 0..120 {
        now += 16;
        scene.scroll = (scene.scroll + 10.0).min(4700.0);
        scene.nodes[0].world = Point::new(0.0, scene.scroll);
        rec.on_event(&mut scene, SceneEvent::ContentMoved, now);
        rec.tick(&mut scene, now);
    }
    rec.on_event(&mut scene, SceneEvent::ScrollEnded, now);
    println!(
        "after scroll: window={:?} visible={} speed={:.0}/s interval={:.1}ms",
        rec.window(),
        scene.visible_rows(),
        rec.scroll_speed(),
        rec.adaptive_interval_ms()
    );
}
