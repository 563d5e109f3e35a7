// 3D 속성 복합 값
// 네이티브 getter는 평탄화된 스칼라 필드로 쓰고, setter는 중첩 구조체를 그대로 받는다.
// 재구성은 getter 방향에만 존재한다.

/// FMOD_VECTOR
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0, z: 0.0 };

    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

impl From<[f32; 3]> for Vector {
    fn from(value: [f32; 3]) -> Vector {
        Vector::new(value[0], value[1], value[2])
    }
}

impl From<Vector> for [f32; 3] {
    fn from(value: Vector) -> [f32; 3] {
        [value.x, value.y, value.z]
    }
}

impl From<(f32, f32, f32)> for Vector {
    fn from(value: (f32, f32, f32)) -> Vector {
        Vector::new(value.0, value.1, value.2)
    }
}

/// FMOD_3D_ATTRIBUTES (호스트 측 중첩 표현, setter 입력으로 그대로 전달)
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Attributes3d {
    pub position: Vector,
    pub velocity: Vector,
    pub forward: Vector,
    pub up: Vector,
}

impl Attributes3d {
    pub fn new(position: Vector, velocity: Vector, forward: Vector, up: Vector) -> Self {
        Self {
            position,
            velocity,
            forward,
            up,
        }
    }

    /// 네이티브 경계 표현으로 평탄화
    pub fn flatten(&self) -> FlatAttributes3d {
        FlatAttributes3d {
            position_x: self.position.x,
            position_y: self.position.y,
            position_z: self.position.z,
            velocity_x: self.velocity.x,
            velocity_y: self.velocity.y,
            velocity_z: self.velocity.z,
            forward_x: self.forward.x,
            forward_y: self.forward.y,
            forward_z: self.forward.z,
            up_x: self.up.x,
            up_y: self.up.y,
            up_z: self.up.z,
        }
    }
}

/// 네이티브 getter가 채우는 평탄화된 3D 속성
///
/// 필드 순서가 `Attributes3d`와 같으므로 메모리 배치도 동일하다.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FlatAttributes3d {
    pub position_x: f32,
    pub position_y: f32,
    pub position_z: f32,
    pub velocity_x: f32,
    pub velocity_y: f32,
    pub velocity_z: f32,
    pub forward_x: f32,
    pub forward_y: f32,
    pub forward_z: f32,
    pub up_x: f32,
    pub up_y: f32,
    pub up_z: f32,
}

impl From<FlatAttributes3d> for Attributes3d {
    fn from(flat: FlatAttributes3d) -> Attributes3d {
        Attributes3d {
            position: Vector::new(flat.position_x, flat.position_y, flat.position_z),
            velocity: Vector::new(flat.velocity_x, flat.velocity_y, flat.velocity_z),
            forward: Vector::new(flat.forward_x, flat.forward_y, flat.forward_z),
            up: Vector::new(flat.up_x, flat.up_y, flat.up_z),
        }
    }
}
