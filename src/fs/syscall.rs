use std::ffi::{CStr, CString};
use std::io;
use std::mem::MaybeUninit;

use libc::{c_char, stat as Stat};

const INITIAL_CWD_BUFFER: usize = 256;

pub fn err_no() -> i32 {
    io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Calls `stat` on `pathname`, returning the errno on failure.
pub fn stat(pathname: &CStr) -> Result<Stat, i32> {
    let mut raw_meta: MaybeUninit<Stat> = MaybeUninit::uninit();
    // SAFETY: pathname is a valid, NUL terminated string and raw_meta points to writable memory
    // large enough for a stat struct.
    if unsafe { libc::stat(pathname.as_ptr(), raw_meta.as_mut_ptr()) } == -1 {
        Err(err_no())?
    }
    // SAFETY: stat either initializes raw_meta or returns an error, which is handled above.
    Ok(unsafe { raw_meta.assume_init() })
}

/// Reads the working directory of the process, growing the buffer until it fits.
pub fn getcwd() -> Result<CString, i32> {
    let mut buf: Vec<u8> = vec![0; INITIAL_CWD_BUFFER];

    loop {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        let ret = unsafe { libc::getcwd(buf.as_mut_ptr().cast::<c_char>(), buf.len()) };
        if !ret.is_null() {
            let len = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
            buf.truncate(len);
            // buf was cut at the first NUL, so this can't fail.
            return CString::new(buf).map_err(|_| libc::EINVAL);
        }

        match err_no() {
            libc::ERANGE => {
                let grown = buf.len().checked_mul(2).ok_or(libc::ENAMETOOLONG)?;
                buf.resize(grown, 0);
            },
            e => Err(e)?,
        }
    }
}
