//! The C runtime the generated programs link against.
//!
//! Generated sources only ever call the functions named here. The header and
//! source are carried as text so the driver can drop them next to the
//! generated file before invoking the C compiler.

/// Stem shared by the runtime files. No generated program may use it.
pub const RUNTIME_STEM: &str = "hectorlib";
pub const RUNTIME_HEADER_NAME: &str = "hectorlib.h";
pub const RUNTIME_SOURCE_NAME: &str = "hectorlib.c";

pub const INT_TYPE: &str = "int";
pub const VECTOR_TYPE: &str = "vi32";
pub const MATRIX_TYPE: &str = "mi32";

pub const VECTOR_ZERO: &str = "vi32_zero";
pub const VECTOR_FROM_COMPS: &str = "vi32_from_comps";
pub const MATRIX_IDENTITY: &str = "mi32_identity";
pub const MATRIX_FROM_COMPS: &str = "mi32_from_comps";

pub const VECTOR_ADD: &str = "vi32_add_vi32";
pub const VECTOR_SUB: &str = "vi32_sub_vi32";
pub const VECTOR_NEG: &str = "vi32_neg";
pub const VECTOR_MULT_SCALAR: &str = "vi32_mult_i32";
pub const VECTOR_MULT_MATRIX: &str = "vi32_mult_mi32";
pub const VECTOR_DOT: &str = "vi32_dot_vi32";
pub const VECTOR_CROSS: &str = "vi32_cross_vi32";

pub const MATRIX_ADD: &str = "mi32_add_mi32";
pub const MATRIX_SUB: &str = "mi32_sub_mi32";
pub const MATRIX_MULT_SCALAR: &str = "mi32_mult_i32";
pub const MATRIX_MULT_VECTOR: &str = "mi32_mult_vi32";
pub const MATRIX_MULT_MATRIX: &str = "mi32_mult_mi32";
pub const MATRIX_TRANSPOSE: &str = "mi32_transpose";

pub const PRINT_INT: &str = "i32_print";
pub const PRINT_POINT: &str = "vi32_print_point";
pub const PRINT_VECTOR: &str = "vi32_print_vector";
pub const PRINT_MATRIX: &str = "mi32_print";

pub const RUNTIME_HEADER: &str = r#"#ifndef HECTORLIB_H
#define HECTORLIB_H

#include <stdint.h>

typedef int32_t i32;

typedef struct vi32 { i32 comps[4]; } vi32;
typedef struct mi32 { i32 comps[16]; } mi32;

void i32_print (i32 i);

vi32 vi32_from_comps (i32 x, i32 y, i32 z, i32 w);
void vi32_zero (vi32 *v);
void vi32_print_point (vi32 v);
void vi32_print_vector (vi32 v);

mi32 mi32_from_comps (
  i32 m11, i32 m12, i32 m13, i32 m14,
  i32 m21, i32 m22, i32 m23, i32 m24,
  i32 m31, i32 m32, i32 m33, i32 m34,
  i32 m41, i32 m42, i32 m43, i32 m44
);
void mi32_identity (mi32 *m);
void mi32_print (mi32 m);

vi32 vi32_neg (vi32 v);
mi32 mi32_transpose (mi32 m);

vi32 vi32_add_vi32 (vi32 lhs, vi32 rhs);
mi32 mi32_add_mi32 (mi32 lhs, mi32 rhs);
vi32 vi32_sub_vi32 (vi32 lhs, vi32 rhs);
mi32 mi32_sub_mi32 (mi32 lhs, mi32 rhs);

vi32 vi32_mult_i32 (vi32 lhs, i32 rhs);
mi32 mi32_mult_i32 (mi32 lhs, i32 rhs);
vi32 mi32_mult_vi32 (mi32 lhs, vi32 rhs);
vi32 vi32_mult_mi32 (vi32 lhs, mi32 rhs);
mi32 mi32_mult_mi32 (mi32 lhs, mi32 rhs);

i32 vi32_dot_vi32 (vi32 lhs, vi32 rhs);
vi32 vi32_cross_vi32 (vi32 lhs, vi32 rhs);

#endif
"#;

pub const RUNTIME_SOURCE: &str = r#"#include "hectorlib.h"

#include <stdio.h>

void i32_print (i32 i) {
  printf("%d\n", i);
}

/*----------------------------------------------------------------------------*/

vi32 vi32_from_comps (i32 x, i32 y, i32 z, i32 w) {
  vi32 v;
  v.comps[0] = x; v.comps[1] = y; v.comps[2] = z; v.comps[3] = w;
  return v;
}

void vi32_zero (vi32 *v) {
  *v = vi32_from_comps(0, 0, 0, 1);
}

void vi32_print_point (vi32 v) {
  printf("(%d,%d,%d,%d)\n", v.comps[0], v.comps[1], v.comps[2], v.comps[3]);
}

void vi32_print_vector (vi32 v) {
  printf("<%d,%d,%d,%d>\n", v.comps[0], v.comps[1], v.comps[2], v.comps[3]);
}

/*----------------------------------------------------------------------------*/

mi32 mi32_from_comps (
  i32 m11, i32 m12, i32 m13, i32 m14,
  i32 m21, i32 m22, i32 m23, i32 m24,
  i32 m31, i32 m32, i32 m33, i32 m34,
  i32 m41, i32 m42, i32 m43, i32 m44
) {
  mi32 m;
  m.comps[ 0] = m11; m.comps[ 1] = m12; m.comps[ 2] = m13; m.comps[ 3] = m14;
  m.comps[ 4] = m21; m.comps[ 5] = m22; m.comps[ 6] = m23; m.comps[ 7] = m24;
  m.comps[ 8] = m31; m.comps[ 9] = m32; m.comps[10] = m33; m.comps[11] = m34;
  m.comps[12] = m41; m.comps[13] = m42; m.comps[14] = m43; m.comps[15] = m44;
  return m;
}

void mi32_identity (mi32 *m) {
  *m = mi32_from_comps(
    1, 0, 0, 0,
    0, 1, 0, 0,
    0, 0, 1, 0,
    0, 0, 0, 1
  );
}

void mi32_print (mi32 m) {
  int r;
  for (r = 0; r < 4; r++) {
    printf("|%d,%d,%d,%d|\n",
      m.comps[r*4], m.comps[r*4 + 1], m.comps[r*4 + 2], m.comps[r*4 + 3]);
  }
}

/*----------------------------------------------------------------------------*/

vi32 vi32_neg (vi32 v) {
  return vi32_from_comps(-v.comps[0], -v.comps[1], -v.comps[2], 1);
}

mi32 mi32_transpose (mi32 m) {
  int r, c; mi32 t;
  for (r = 0; r < 4; r++)
    for (c = 0; c < 4; c++)
      t.comps[c*4 + r] = m.comps[r*4 + c];
  return t;
}

/*----------------------------------------------------------------------------*/

vi32 vi32_add_vi32 (vi32 lhs, vi32 rhs) {
  int i; vi32 v;
  for (i = 0; i < 3; i++) v.comps[i] = lhs.comps[i] + rhs.comps[i];
  v.comps[3] = 1;
  return v;
}

mi32 mi32_add_mi32 (mi32 lhs, mi32 rhs) {
  int i; mi32 m;
  for (i = 0; i < 16; i++) m.comps[i] = lhs.comps[i] + rhs.comps[i];
  return m;
}

vi32 vi32_sub_vi32 (vi32 lhs, vi32 rhs) {
  int i; vi32 v;
  for (i = 0; i < 3; i++) v.comps[i] = lhs.comps[i] - rhs.comps[i];
  v.comps[3] = 1;
  return v;
}

mi32 mi32_sub_mi32 (mi32 lhs, mi32 rhs) {
  int i; mi32 m;
  for (i = 0; i < 16; i++) m.comps[i] = lhs.comps[i] - rhs.comps[i];
  return m;
}

/*----------------------------------------------------------------------------*/

vi32 vi32_mult_i32 (vi32 lhs, i32 rhs) {
  int i; vi32 v;
  for (i = 0; i < 3; i++) v.comps[i] = lhs.comps[i] * rhs;
  v.comps[3] = lhs.comps[3];
  return v;
}

mi32 mi32_mult_i32 (mi32 lhs, i32 rhs) {
  int i; mi32 m;
  for (i = 0; i < 16; i++) m.comps[i] = lhs.comps[i] * rhs;
  return m;
}

// post-multiplication
vi32 mi32_mult_vi32 (mi32 lhs, vi32 rhs) {
  int r, k; vi32 v;
  for (r = 0; r < 4; r++) {
    v.comps[r] = 0;
    for (k = 0; k < 4; k++) v.comps[r] += lhs.comps[r*4 + k] * rhs.comps[k];
  }
  return v;
}

// pre-multiplication
vi32 vi32_mult_mi32 (vi32 lhs, mi32 rhs) {
  int c, k; vi32 v;
  for (c = 0; c < 4; c++) {
    v.comps[c] = 0;
    for (k = 0; k < 4; k++) v.comps[c] += lhs.comps[k] * rhs.comps[k*4 + c];
  }
  return v;
}

mi32 mi32_mult_mi32 (mi32 lhs, mi32 rhs) {
  int r, c, k; mi32 m;
  for (r = 0; r < 4; r++) {
    for (c = 0; c < 4; c++) {
      m.comps[r*4 + c] = 0;
      for (k = 0; k < 4; k++)
        m.comps[r*4 + c] += lhs.comps[r*4 + k] * rhs.comps[k*4 + c];
    }
  }
  return m;
}

/*----------------------------------------------------------------------------*/

i32 vi32_dot_vi32 (vi32 lhs, vi32 rhs) {
  return lhs.comps[0]*rhs.comps[0] + lhs.comps[1]*rhs.comps[1] + lhs.comps[2]*rhs.comps[2];
}

vi32 vi32_cross_vi32 (vi32 lhs, vi32 rhs) {
  return vi32_from_comps(
    lhs.comps[1]*rhs.comps[2] - lhs.comps[2]*rhs.comps[1],
    lhs.comps[2]*rhs.comps[0] - lhs.comps[0]*rhs.comps[2],
    lhs.comps[0]*rhs.comps[1] - lhs.comps[1]*rhs.comps[0],
    1
  );
}
"#;
