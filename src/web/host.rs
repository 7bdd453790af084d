// host.rs - Renderer backed by a JavaScript scene host
//
// The host object owns the actual scene graph (three.js or similar) and
// exposes setup(descriptor), draw(frame) and resize(width, height).

use js_sys::{Array, Float32Array, Function, Object, Reflect, Uint8Array};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::error::RenderError;
use crate::palette::Rgb;
use crate::render::{Encoder, Renderer};
use crate::scene::{Camera, Light, Scene};

#[wasm_bindgen]
extern "C" {
    pub type SceneHost;

    #[wasm_bindgen(method, catch)]
    fn setup(this: &SceneHost, descriptor: &JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn draw(this: &SceneHost, frame: &Float32Array) -> Result<(), JsValue>;

    #[wasm_bindgen(method, catch)]
    fn resize(this: &SceneHost, width: u32, height: u32) -> Result<(), JsValue>;
}

pub struct JsRenderer {
    host: SceneHost,
    encoder: Encoder,
}

impl JsRenderer {
    /// Wrap `host`, or report rendering unavailable when it cannot draw.
    pub fn attach(host: JsValue) -> Result<Self, RenderError> {
        if host.is_null() || host.is_undefined() {
            return Err(RenderError::Unavailable("no scene host".into()));
        }
        for method in ["setup", "draw", "resize"] {
            let f = Reflect::get(&host, &method.into()).unwrap_or(JsValue::UNDEFINED);
            if !f.is_instance_of::<Function>() {
                return Err(RenderError::Unavailable(format!("scene host has no {method}()")));
            }
        }
        Ok(Self { host: host.unchecked_into(), encoder: Encoder::new() })
    }
}

impl Renderer for JsRenderer {
    fn prepare(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError> {
        let descriptor = describe(scene, camera).map_err(|e| RenderError::Unavailable(js_err(&e)))?;
        self.host
            .setup(&descriptor)
            .map_err(|e| RenderError::Unavailable(js_err(&e)))
    }

    fn draw(&mut self, scene: &Scene, camera: &Camera) -> Result<(), RenderError> {
        let frame = Float32Array::from(self.encoder.encode(scene, camera));
        self.host.draw(&frame).map_err(|e| RenderError::Draw(js_err(&e)))
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), RenderError> {
        self.host
            .resize(width, height)
            .map_err(|e| RenderError::Resize(js_err(&e)))
    }
}

fn js_err(e: &JsValue) -> String {
    e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

fn set(obj: &Object, key: &str, value: impl Into<JsValue>) -> Result<(), JsValue> {
    Reflect::set(obj, &key.into(), &value.into()).map(|_| ())
}

fn vec3(x: f64, y: f64, z: f64) -> Array {
    Array::of3(&x.into(), &y.into(), &z.into())
}

fn color(c: Rgb) -> JsValue {
    JsValue::from(c.to_hex())
}

/// Static scene content as a plain JS object.
fn describe(scene: &Scene, camera: &Camera) -> Result<JsValue, JsValue> {
    let root = Object::new();
    set(&root, "clearColor", color(scene.clear_color))?;

    let cam = Object::new();
    set(&cam, "fov", camera.fov_degrees)?;
    set(&cam, "aspect", camera.aspect)?;
    set(&cam, "near", camera.near)?;
    set(&cam, "far", camera.far)?;
    set(&cam, "position", vec3(camera.position.x, camera.position.y, camera.position.z))?;
    set(&root, "camera", cam)?;

    let lights = Array::new();
    for light in &scene.lights {
        let l = Object::new();
        match *light {
            Light::Ambient { color: c, intensity } => {
                set(&l, "kind", "ambient")?;
                set(&l, "color", color(c))?;
                set(&l, "intensity", intensity)?;
            }
            Light::Point { color: c, intensity, position: p } => {
                set(&l, "kind", "point")?;
                set(&l, "color", color(c))?;
                set(&l, "intensity", intensity)?;
                set(&l, "position", vec3(p.x, p.y, p.z))?;
            }
        }
        lights.push(&l);
    }
    set(&root, "lights", lights)?;

    let style = &scene.panel_style;
    let panels = Array::new();
    for panel in &scene.panels {
        let p = Object::new();
        let t = &panel.transform;
        set(&p, "name", panel.entry.name)?;
        set(&p, "text", panel.entry.text)?;
        set(&p, "color", color(panel.entry.color))?;
        set(&p, "size", vec3(style.size.x, style.size.y, style.size.z))?;
        set(&p, "shininess", style.shininess)?;
        set(&p, "specular", color(style.specular))?;
        set(&p, "texture", Uint8Array::from(panel.texture.bytes()))?;
        set(&p, "textureSize", panel.texture.size())?;
        set(&p, "position", vec3(t.position.x, t.position.y, t.position.z))?;
        set(&p, "rotation", vec3(t.rotation.x, t.rotation.y, t.rotation.z))?;
        panels.push(&p);
    }
    set(&root, "panels", panels)?;

    let cloud = &scene.particles;
    let flat: Vec<f32> = cloud.positions().iter().flat_map(|v| v.to_array()).collect();
    let particles = Object::new();
    set(&particles, "positions", Float32Array::from(flat.as_slice()))?;
    set(&particles, "size", cloud.style.point_size)?;
    set(&particles, "color", color(cloud.style.color))?;
    set(&particles, "opacity", cloud.style.opacity)?;
    set(&root, "particles", particles)?;

    Ok(root.into())
}
