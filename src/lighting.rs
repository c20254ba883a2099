use glam::Vec3;

use crate::camera::Camera;
use crate::types::{
    DirectionalLightUniform, LightingUniform, PointLightUniform, SpotLightUniform,
    MAX_POINT_LIGHTS,
};

/// Distance falloff: `1 / (constant + linear * d + quadratic * d^2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

impl Attenuation {
    /// Roughly a 50 unit range
    pub const MEDIUM: Self = Self {
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
    };

    pub fn factor(&self, distance: f32) -> f32 {
        1.0 / (self.constant + self.linear * distance + self.quadratic * distance * distance)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DirectionalLight {
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for DirectionalLight {
    /// Dim blue moonlight from above
    fn default() -> Self {
        Self {
            direction: Vec3::new(-0.2, -1.0, -0.3),
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::new(0.04, 0.04, 0.4),
            specular: Vec3::splat(0.05),
        }
    }
}

impl DirectionalLight {
    pub fn to_uniform(&self) -> DirectionalLightUniform {
        DirectionalLightUniform {
            direction: self.direction.to_array(),
            ambient: self.ambient.to_array(),
            diffuse: self.diffuse.to_array(),
            specular: self.specular.to_array(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
}

impl PointLight {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.5),
            specular: Vec3::ONE,
            attenuation: Attenuation::MEDIUM,
        }
    }

    pub fn attenuation_at(&self, point: Vec3) -> f32 {
        self.attenuation.factor(self.position.distance(point))
    }

    pub fn to_uniform(&self) -> PointLightUniform {
        PointLightUniform {
            position: self.position.to_array(),
            constant: self.attenuation.constant,
            ambient: self.ambient.to_array(),
            linear: self.attenuation.linear,
            diffuse: self.diffuse.to_array(),
            quadratic: self.attenuation.quadratic,
            specular: self.specular.to_array(),
            _pad: 0.0,
        }
    }
}

/// Cone light; cutoffs are stored as cosines so the shader compares dot products
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
    pub cut_off: f32,
    pub outer_cut_off: f32,
}

impl SpotLight {
    pub const INNER_ANGLE: f32 = 12.5;
    pub const OUTER_ANGLE: f32 = 15.0;

    /// White flashlight held at the eye
    pub fn flashlight(camera: &Camera) -> Self {
        Self {
            position: camera.position(),
            direction: camera.front(),
            ambient: Vec3::ZERO,
            diffuse: Vec3::ONE,
            specular: Vec3::ONE,
            attenuation: Attenuation::MEDIUM,
            cut_off: Self::INNER_ANGLE.to_radians().cos(),
            outer_cut_off: Self::OUTER_ANGLE.to_radians().cos(),
        }
    }

    pub fn follow(&mut self, camera: &Camera) {
        self.position = camera.position();
        self.direction = camera.front();
    }

    /// Soft-edged cone factor for the cosine between the spot axis and the
    /// direction to a fragment: 1 inside the inner cone, 0 outside the outer.
    pub fn cone_intensity(&self, cos_theta: f32) -> f32 {
        let epsilon = self.cut_off - self.outer_cut_off;
        ((cos_theta - self.outer_cut_off) / epsilon).clamp(0.0, 1.0)
    }

    pub fn to_uniform(&self) -> SpotLightUniform {
        SpotLightUniform {
            position: self.position.to_array(),
            constant: self.attenuation.constant,
            direction: self.direction.to_array(),
            linear: self.attenuation.linear,
            ambient: self.ambient.to_array(),
            quadratic: self.attenuation.quadratic,
            diffuse: self.diffuse.to_array(),
            cut_off: self.cut_off,
            specular: self.specular.to_array(),
            outer_cut_off: self.outer_cut_off,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub shininess: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self { shininess: 10.0 }
    }
}

/// Everything the lit pipeline needs besides textures
#[derive(Debug, Clone, PartialEq)]
pub struct SceneLights {
    pub directional: DirectionalLight,
    pub points: Vec<PointLight>,
    pub spot: SpotLight,
    pub material: Material,
}

impl SceneLights {
    pub fn new(point_positions: &[Vec3], camera: &Camera) -> Self {
        if point_positions.len() > MAX_POINT_LIGHTS {
            log::warn!(
                "{} point lights requested, only the first {} are uploaded",
                point_positions.len(),
                MAX_POINT_LIGHTS
            );
        }

        Self {
            directional: DirectionalLight::default(),
            points: point_positions.iter().copied().map(PointLight::new).collect(),
            spot: SpotLight::flashlight(camera),
            material: Material::default(),
        }
    }

    pub fn to_uniform(&self) -> LightingUniform {
        let mut points = [PointLightUniform::default(); MAX_POINT_LIGHTS];
        let count = self.points.len().min(MAX_POINT_LIGHTS);
        for (slot, light) in points.iter_mut().zip(&self.points) {
            *slot = light.to_uniform();
        }

        LightingUniform {
            directional: self.directional.to_uniform(),
            spot: self.spot.to_uniform(),
            points,
            point_count: count as u32,
            shininess: self.material.shininess,
            _pad: [0.0; 2],
        }
    }
}
