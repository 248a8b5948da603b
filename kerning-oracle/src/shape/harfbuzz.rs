//! Shaping with HarfBuzz through its C API.

use std::{
    ffi::{c_char, c_int, c_uint, c_void},
    ptr,
};

use harfbuzz_sys as hb;
use skrifa::GlyphId;

use super::{GlyphResolver, ShapeRequest, ShapedGlyph, ShapingEngine};
use crate::{error::Error, script::Direction};

/// A HarfBuzz font whose codepoint and advance callbacks are replaced by a
/// [`GlyphResolver`].
///
/// The handle is not thread safe; create one per thread.
pub struct HarfBuzzShaper {
    font: *mut hb::hb_font_t,
    buffer: *mut hb::hb_buffer_t,
}

impl HarfBuzzShaper {
    pub fn new<R: GlyphResolver>(font_data: &[u8], resolver: R) -> Result<Self, Error> {
        let len = c_uint::try_from(font_data.len())
            .map_err(|_| Error::Shaping("font data is too large".into()))?;
        // SAFETY: the blob copies the data, so nothing borrowed from
        // `font_data` outlives this call. Each object created here is either
        // owned by `Self` and released in `Drop`, or released below once the
        // object that references it holds its own reference.
        unsafe {
            let blob = hb::hb_blob_create(
                font_data.as_ptr() as *const c_char,
                len,
                hb::HB_MEMORY_MODE_DUPLICATE,
                ptr::null_mut(),
                None,
            );
            let face = hb::hb_face_create(blob, 0);
            hb::hb_blob_destroy(blob);
            if hb::hb_face_get_glyph_count(face) == 0 {
                hb::hb_face_destroy(face);
                return Err(Error::Shaping("HarfBuzz found no glyphs".into()));
            }
            let font = hb::hb_font_create(face);
            hb::hb_face_destroy(face);

            let funcs = hb::hb_font_funcs_create();
            hb::hb_font_funcs_set_nominal_glyph_func(
                funcs,
                Some(nominal_glyph::<R>),
                ptr::null_mut(),
                None,
            );
            hb::hb_font_funcs_set_glyph_h_advance_func(
                funcs,
                Some(glyph_h_advance::<R>),
                ptr::null_mut(),
                None,
            );
            hb::hb_font_funcs_make_immutable(funcs);
            let resolver = Box::into_raw(Box::new(resolver));
            hb::hb_font_set_funcs(
                font,
                funcs,
                resolver as *mut c_void,
                Some(destroy_resolver::<R>),
            );
            hb::hb_font_funcs_destroy(funcs);

            let buffer = hb::hb_buffer_create();
            if hb::hb_buffer_allocation_successful(buffer) == 0 {
                hb::hb_buffer_destroy(buffer);
                hb::hb_font_destroy(font);
                return Err(Error::Shaping("could not allocate buffer".into()));
            }
            Ok(Self { font, buffer })
        }
    }
}

impl ShapingEngine for HarfBuzzShaper {
    fn shape(&mut self, request: &ShapeRequest) -> Result<Vec<ShapedGlyph>, Error> {
        let len = c_int::try_from(request.codepoints.len())
            .map_err(|_| Error::Shaping("too many codepoints".into()))?;
        let script = request.script.to_be_bytes();
        let direction = match request.direction {
            Direction::LeftToRight => hb::HB_DIRECTION_LTR,
            Direction::RightToLeft => hb::HB_DIRECTION_RTL,
        };
        // SAFETY: the buffer and font are valid for the lifetime of `self`,
        // and the info and position arrays are only read before the buffer
        // is modified again.
        unsafe {
            hb::hb_buffer_clear_contents(self.buffer);
            hb::hb_buffer_add_codepoints(self.buffer, request.codepoints.as_ptr(), len, 0, len);
            hb::hb_buffer_set_direction(self.buffer, direction);
            hb::hb_buffer_set_script(
                self.buffer,
                hb::hb_script_from_string(script.as_ptr() as *const c_char, script.len() as c_int),
            );
            if let Some(language) = request.language.bcp47() {
                hb::hb_buffer_set_language(
                    self.buffer,
                    hb::hb_language_from_string(
                        language.as_ptr() as *const c_char,
                        language.len() as c_int,
                    ),
                );
            }
            hb::hb_shape(self.font, self.buffer, ptr::null(), 0);

            let mut count: c_uint = 0;
            let infos = hb::hb_buffer_get_glyph_infos(self.buffer, &mut count);
            let positions = hb::hb_buffer_get_glyph_positions(self.buffer, &mut count);
            if count == 0 {
                return Ok(Vec::new());
            }
            if infos.is_null() || positions.is_null() {
                return Err(Error::Shaping("shaping produced no output".into()));
            }
            let infos = std::slice::from_raw_parts(infos, count as usize);
            let positions = std::slice::from_raw_parts(positions, count as usize);
            Ok(infos
                .iter()
                .zip(positions)
                .map(|(info, pos)| ShapedGlyph {
                    glyph_id: GlyphId::new(info.codepoint),
                    cluster: info.cluster,
                    x_advance: pos.x_advance,
                })
                .collect())
        }
    }
}

impl Drop for HarfBuzzShaper {
    fn drop(&mut self) {
        // SAFETY: both pointers were created in `new` and are released once.
        unsafe {
            hb::hb_buffer_destroy(self.buffer);
            hb::hb_font_destroy(self.font);
        }
    }
}

unsafe extern "C" fn nominal_glyph<R: GlyphResolver>(
    _font: *mut hb::hb_font_t,
    font_data: *mut c_void,
    unicode: hb::hb_codepoint_t,
    glyph: *mut hb::hb_codepoint_t,
    _user_data: *mut c_void,
) -> hb::hb_bool_t {
    let resolver = &*(font_data as *const R);
    *glyph = resolver.resolve(unicode).to_u32();
    1
}

unsafe extern "C" fn glyph_h_advance<R: GlyphResolver>(
    _font: *mut hb::hb_font_t,
    font_data: *mut c_void,
    _glyph: hb::hb_codepoint_t,
    _user_data: *mut c_void,
) -> hb::hb_position_t {
    let resolver = &*(font_data as *const R);
    resolver.default_advance()
}

unsafe extern "C" fn destroy_resolver<R: GlyphResolver>(font_data: *mut c_void) {
    drop(Box::from_raw(font_data as *mut R));
}
