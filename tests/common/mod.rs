use cosmoforge_lib::model::body::Body;
use cosmoforge_lib::model::config::AppConfig;
use cosmoforge_lib::model::stage::Stage;
use cosmoforge_lib::model::world::World;
use cosmoforge_lib::model::Vec2;
use uuid::Uuid;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    bodies: Vec<Body>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.scenario = "playground".to_string();
        config.world.seed = Some(42);
        Self {
            config,
            bodies: Vec::new(),
        }
    }

    /// No gravity: collision and evolution behavior in isolation.
    pub fn without_gravity(self) -> Self {
        self.with_config(|c| c.physics.gravity = 0.0)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.bodies.push(body);
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config);
        world.bodies = self.bodies;
        world
    }
}

#[allow(dead_code)]
pub struct BodyBuilder {
    position: Vec2,
    velocity: Vec2,
    mass: f64,
    color: (u8, u8, u8),
    stage: Option<Stage>,
    radius: Option<f64>,
    id: Option<Uuid>,
}

#[allow(dead_code)]
impl BodyBuilder {
    pub fn new() -> Self {
        Self {
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            mass: 100.0,
            color: (100, 100, 100),
            stage: None,
            radius: None,
            id: None,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn vel(mut self, x: f64, y: f64) -> Self {
        self.velocity = Vec2::new(x, y);
        self
    }

    pub fn mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn color(mut self, r: u8, g: u8, b: u8) -> Self {
        self.color = (r, g, b);
        self
    }

    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }

    pub fn build(self) -> Body {
        let mut body = Body::new(self.position, self.velocity, self.mass, self.color);
        if let Some(id) = self.id {
            body.id = id;
        }
        if let Some(stage) = self.stage {
            body = body.with_stage(stage);
        }
        if let Some(radius) = self.radius {
            body = body.with_radius(radius);
        }
        body
    }
}
