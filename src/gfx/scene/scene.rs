use std::path::Path;

use anyhow::Context;
use log::info;

use crate::gfx::geometry::{Mesh, MeshBuilder, MeshError};
use crate::obj::{FileSource, Group, Model, ObjParser, ParseOptions};

use super::category::Category;

/// One group of the model, ready for the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub category: Category,
    pub mesh: Mesh,
}

impl SceneObject {
    /// Builds the mesh and classifies the group
    pub fn from_group(model: &Model, group: &Group) -> Result<Self, MeshError> {
        Ok(Self {
            name: group.name.clone(),
            category: Category::from_group_name(&group.name),
            mesh: MeshBuilder::new(model).build(group)?,
        })
    }
}

/// Number of objects per category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryCounts {
    pub roofs: usize,
    pub wall_penetrations: usize,
    pub walls: usize,
}

/// All groups of a model as (name, category, mesh) objects, in model order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds one object per group of `model`
    ///
    /// Models from [`ObjParser`] always build; hand-assembled ones can carry
    /// indices outside their attribute lists.
    pub fn from_model(model: &Model) -> Result<Self, MeshError> {
        let mut scene = Self::new();
        for group in &model.groups {
            scene.add_group(model, group)?;
        }
        Ok(scene)
    }

    /// Loads a scene from an OBJ file with default parse options
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Self::load_with(path, ParseOptions::default())
    }

    /// Loads a scene from an OBJ file
    ///
    /// The file is read incrementally; with `options.presize` it is read twice,
    /// once to count records and once to parse them.
    pub fn load_with(path: impl AsRef<Path>, options: ParseOptions) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let source = FileSource::open(path)
            .with_context(|| format!("Failed to open OBJ file {}", path.display()))?;

        let model = ObjParser::with_options(source, options)
            .parse()
            .with_context(|| format!("Failed to parse OBJ file {}", path.display()))?;

        let scene = Self::from_model(&model)
            .with_context(|| format!("Failed to build meshes for {}", path.display()))?;
        let counts = scene.category_counts();
        info!(
            "loaded {}: {} roofs, {} wall penetrations, {} walls",
            path.display(),
            counts.roofs,
            counts.wall_penetrations,
            counts.walls
        );
        Ok(scene)
    }

    pub fn add_group(&mut self, model: &Model, group: &Group) -> Result<&SceneObject, MeshError> {
        let index = self.objects.len();
        self.objects.push(SceneObject::from_group(model, group)?);
        Ok(&self.objects[index])
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    /// Objects of one category, in model order
    pub fn objects_in(&self, category: Category) -> impl Iterator<Item = &SceneObject> {
        self.objects.iter().filter(move |o| o.category == category)
    }

    pub fn find(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn category_counts(&self) -> CategoryCounts {
        let mut counts = CategoryCounts::default();
        for object in &self.objects {
            match object.category {
                Category::Roof => counts.roofs += 1,
                Category::WallPenetration => counts.wall_penetrations += 1,
                Category::Wall => counts.walls += 1,
            }
        }
        counts
    }

    pub fn total_triangles(&self) -> usize {
        self.objects.iter().map(|o| o.mesh.triangle_count()).sum()
    }
}
